//! Global CSS styles for the guidebook.
//!
//! Farmstay palette: forest teal, warm sand, mango accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --teal: #2a5d68;
  --teal-dark: #1d434b;
  --sand: #f6f1e7;
  --sand-dark: #e8dfcc;
  --mango: #ffc107;
  --ink: #1f2a2e;
  --ink-muted: rgba(31, 42, 46, 0.65);
  --white: #ffffff;
  --danger: #c0392b;

  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', Roboto, sans-serif;

  --radius: 14px;
  --shadow: 0 4px 12px rgba(0, 0, 0, 0.2);

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--sand);
  color: var(--ink);
  line-height: 1.5;
}

.guidebook.modal-open {
  overflow: hidden;
  height: 100vh;
}

/* === Hero === */
.hero {
  position: relative;
  height: 320px;
  overflow: hidden;
  color: var(--white);
}

.hero-slider .slide {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
  opacity: 0;
  transition: opacity 1.2s ease;
}

.hero-slider .slide.active {
  opacity: 1;
}

.hero-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 1.5rem;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent 60%);
}

.hero-title {
  font-family: var(--font-serif);
  font-size: 2rem;
}

.hero-location {
  font-weight: 600;
}

.hero-tagline {
  opacity: 0.85;
  margin-bottom: 0.75rem;
}

.share-btn {
  align-self: flex-start;
  padding: 0.4rem 1rem;
  border: 1px solid var(--white);
  border-radius: 30px;
  background: rgba(255, 255, 255, 0.15);
  color: var(--white);
  cursor: pointer;
}

.share-btn:disabled {
  opacity: 0.6;
}

/* === Triggers === */
.quick-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  padding: 1rem;
}

.action-btn, .footer-btn {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.5rem 0.9rem;
  border: none;
  border-radius: 30px;
  background: var(--teal);
  color: var(--white);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.action-btn:hover, .footer-btn:hover {
  background: var(--teal-dark);
}

.cards-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.75rem;
  padding: 0 1rem 1rem;
}

.info-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.4rem;
  padding: 1.25rem 0.5rem;
  border: none;
  border-radius: var(--radius);
  background: var(--white);
  box-shadow: var(--shadow);
  cursor: pointer;
  font-size: 1rem;
}

.trigger-icon {
  font-size: 1.4rem;
}

.page-footer {
  padding: 1.5rem 1rem 4rem;
  text-align: center;
}

.footer-note {
  margin-top: 0.75rem;
  color: var(--ink-muted);
  font-size: 0.875rem;
}

/* === Modals === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 100;
  background: rgba(0, 0, 0, 0.55);
  overflow-y: auto;
}

.modal-content {
  position: relative;
  margin: 2rem auto;
  width: min(94%, 560px);
  padding: 1.5rem 1.25rem;
  border-radius: var(--radius);
  background: var(--sand);
}

.close {
  position: absolute;
  top: 0.5rem;
  right: 0.9rem;
  font-size: 1.75rem;
  cursor: pointer;
}

.modal-title {
  font-family: var(--font-serif);
  color: var(--teal);
  margin-bottom: 1rem;
}

.panel-markdown ul, .panel-markdown ol {
  padding-left: 1.25rem;
}

.panel-markdown blockquote {
  margin: 0.75rem 0;
  padding-left: 0.75rem;
  border-left: 3px solid var(--mango);
}

.panel-markdown table {
  width: 100%;
  border-collapse: collapse;
}

.panel-markdown th, .panel-markdown td {
  padding: 0.4rem;
  border-bottom: 1px solid var(--sand-dark);
  text-align: left;
}

.sticky-back-btn {
  position: fixed;
  top: 1rem;
  left: 1rem;
  z-index: 200;
  padding: 0.4rem 0.9rem;
  border: none;
  border-radius: 30px;
  background: var(--white);
  box-shadow: var(--shadow);
  cursor: pointer;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
}

.sticky-back-btn.visible {
  opacity: 1;
  pointer-events: auto;
}

/* === Collapsible lists === */
.rule-category, .amenity-category {
  margin-bottom: 0.5rem;
  border-radius: 10px;
  background: var(--white);
}

.category-header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1rem;
  cursor: pointer;
}

.category-header h3 {
  flex: 1;
  font-size: 1rem;
}

.category-indicator {
  font-style: normal;
  transition: transform var(--transition-normal);
}

.category-content {
  padding: 0 1rem 0.75rem 2.25rem;
}

/* === Sliders === */
.gallery-slider, .villa-slider, .room-image-gallery {
  position: relative;
  margin-bottom: 0.75rem;
}

.slider-image {
  display: none;
  width: 100%;
  border-radius: 10px;
}

.slider-image.active {
  display: block;
}

.slider-nav {
  position: absolute;
  top: 40%;
  width: 2rem;
  height: 2rem;
  border: none;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.8);
  cursor: pointer;
}

.slider-nav.prev { left: 0.5rem; }
.slider-nav.next { right: 0.5rem; }

.slider-counter {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  padding: 0.1rem 0.5rem;
  border-radius: 10px;
  background: rgba(0, 0, 0, 0.55);
  color: var(--white);
  font-size: 0.8rem;
}

.slider-thumbnails {
  display: flex;
  gap: 0.4rem;
  margin-top: 0.4rem;
  overflow-x: auto;
}

.thumbnail {
  width: 56px;
  height: 42px;
  object-fit: cover;
  border-radius: 6px;
  opacity: 0.55;
  cursor: pointer;
}

.thumbnail.active {
  opacity: 1;
  outline: 2px solid var(--teal);
}

.slider-dots {
  display: flex;
  justify-content: center;
  gap: 0.35rem;
  margin-top: 0.4rem;
}

.dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--sand-dark);
  cursor: pointer;
}

.dot.active {
  background: var(--teal);
}

/* === Gallery === */
.gallery-tabs, .villa-tabs, .filter-bar {
  display: flex;
  gap: 0.4rem;
  margin-bottom: 0.75rem;
}

.gallery-tab, .villa-tab, .filter-btn {
  padding: 0.35rem 0.8rem;
  border: 1px solid var(--teal);
  border-radius: 30px;
  background: transparent;
  color: var(--teal);
  cursor: pointer;
}

.gallery-tab.active, .villa-tab.active, .filter-btn.active {
  background: var(--teal);
  color: var(--white);
}

.gallery-section, .villa-content {
  display: none;
}

.gallery-section.active, .villa-content.active {
  display: block;
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.4rem;
  margin-bottom: 1rem;
}

.gallery-item {
  display: none;
  cursor: pointer;
}

.gallery-item.show {
  display: block;
}

.gallery-item img {
  width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
  border-radius: 6px;
}

/* === Rooms === */
.room-list {
  display: grid;
  gap: 0.75rem;
}

.room-card {
  padding: 0.75rem;
  border-radius: 10px;
  background: var(--white);
}

.room-card.coming-soon {
  cursor: pointer;
  opacity: 0.75;
}

.badge {
  display: inline-block;
  margin-top: 0.25rem;
  padding: 0.1rem 0.5rem;
  border-radius: 10px;
  background: var(--mango);
  font-size: 0.75rem;
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 300;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.9);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.lightbox img {
  max-width: 92%;
  max-height: 86%;
  transform: scale(0.9);
  transition: transform var(--transition-normal);
}

.lightbox.active {
  opacity: 1;
}

.lightbox.active img {
  transform: scale(1);
}

.lightbox-close {
  position: absolute;
  top: 1rem;
  right: 1.25rem;
  color: var(--white);
  font-size: 2rem;
  cursor: pointer;
}

/* === Notices === */
.notice {
  position: fixed;
  bottom: 20px;
  left: 50%;
  transform: translateX(-50%);
  z-index: 400;
  padding: 12px 20px;
  border-radius: 30px;
  background: var(--teal);
  color: var(--white);
  box-shadow: var(--shadow);
  text-align: center;
  animation: slideUp 0.3s ease-out;
}

.notice--coming-soon {
  border: 2px solid var(--mango);
}

.notice--failure {
  background: var(--danger);
}

@keyframes slideUp {
  from { transform: translate(-50%, 50px); opacity: 0; }
  to { transform: translate(-50%, 0); opacity: 1; }
}
"#;
