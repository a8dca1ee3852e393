//! Inline stylesheet for the landing page.
//!
//! The page ships as one wasm bundle plus `index.html`; the CSS is compiled
//! in and rendered into a `<style>` element by [`App`](crate::App).
//!
//! Breakpoints: carousels give way to grids at 768px, the hero splits into
//! two columns at 1024px and the desktop navigation appears at 935px.

/// Complete CSS for the page, dark theme only.
pub const FEST_CSS: &str = r#"
:root {
    --bg: #03030a;
    --surface: rgba(255, 255, 255, 0.03);
    --surface-hover: rgba(255, 255, 255, 0.06);
    --border: rgba(255, 255, 255, 0.08);
    --text: #f5f5f7;
    --text-muted: #9ca3af;
    --text-soft: #d1d5db;
    --indigo: #6366f1;
    --indigo-light: #a5b4fc;
    --purple: #9333ea;
    --emerald: #34d399;
    --amber: #fbbf24;
    --radius: 1rem;
    --radius-lg: 2rem;
    --nav-height: 80px;
    --font: 'Inter', system-ui, -apple-system, sans-serif;
    --font-arabic: 'Amiri', 'Scheherazade New', serif;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: auto; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
    overflow-x: hidden;
}

img { max-width: 100%; display: block; }
a { color: inherit; text-decoration: none; }
button { font: inherit; color: inherit; cursor: pointer; }
button:disabled { cursor: default; opacity: 0.35; }

:focus-visible { outline: 2px solid var(--indigo); outline-offset: 3px; }

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}

.skip-to-content {
    position: absolute;
    top: -100px;
    left: 1rem;
    z-index: 10002;
    padding: 0.75rem 1.25rem;
    border-radius: 0.5rem;
    background: var(--indigo);
    color: #fff;
}
.skip-to-content:focus { top: 1rem; }

.bg-glow {
    position: fixed;
    inset: 0;
    z-index: -1;
    pointer-events: none;
    background:
        radial-gradient(ellipse at 20% 0%, rgba(99, 102, 241, 0.18), transparent 55%),
        radial-gradient(ellipse at 85% 30%, rgba(147, 51, 234, 0.12), transparent 50%);
}

.container {
    width: 100%;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section { padding-top: 5rem; padding-bottom: 5rem; position: relative; }
.section-header { margin-bottom: 4rem; }
.section-header.centered { text-align: center; }
.section-header.centered .section-description { margin-left: auto; margin-right: auto; }
.section-title {
    font-size: clamp(1.875rem, 4vw, 3rem);
    font-weight: 700;
    margin: 0 0 1rem;
}
.section-description {
    color: var(--text-muted);
    font-size: 1.125rem;
    max-width: 48rem;
    margin: 0;
}

.gradient-text {
    background: linear-gradient(90deg, var(--indigo-light), #c084fc, var(--indigo-light));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.divider {
    height: 1px;
    margin: 1rem 0;
    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.1), transparent);
}

/* Reveal on scroll */

.reveal {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s cubic-bezier(0.16, 1, 0.3, 1), transform 0.8s cubic-bezier(0.16, 1, 0.3, 1);
}
.reveal.active { opacity: 1; transform: none; }

@media (prefers-reduced-motion: reduce) {
    .reveal { opacity: 1; transform: none; transition: none; }
}

/* Cards and buttons */

.pro-card {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    backdrop-filter: blur(12px);
    transition: background 0.3s, border-color 0.3s, transform 0.3s;
}
.pro-card:hover { background: var(--surface-hover); border-color: rgba(99, 102, 241, 0.35); }

.card-title { font-size: 1.25rem; font-weight: 700; margin: 0 0 0.75rem; }
.card-text { color: var(--text-muted); font-size: 0.875rem; margin: 0; }

.btn {
    display: inline-block;
    padding: 1rem 2rem;
    border-radius: 0.75rem;
    font-weight: 600;
    text-align: center;
}
.btn-primary {
    background: linear-gradient(135deg, var(--indigo), var(--purple));
    color: #fff;
    box-shadow: 0 10px 30px -10px rgba(99, 102, 241, 0.6);
    transition: transform 0.2s, box-shadow 0.2s;
}
.btn-primary:hover { transform: translateY(-1px); box-shadow: 0 14px 34px -10px rgba(99, 102, 241, 0.8); }
.btn-secondary {
    border: 1px solid var(--border);
    color: var(--text-soft);
    font-size: 0.875rem;
}
.btn-secondary:hover { background: var(--surface-hover); }

.badge {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 700;
    color: var(--text-soft);
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid var(--border);
}
.badge-accent {
    color: var(--indigo-light);
    background: rgba(99, 102, 241, 0.2);
    border-color: rgba(99, 102, 241, 0.3);
}

/* Navigation */

.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 10000;
    backdrop-filter: blur(10px);
    background: linear-gradient(180deg, rgba(3, 3, 10, 0.85), rgba(3, 3, 10, 0));
}
.nav-inner {
    max-width: 80rem;
    height: var(--nav-height);
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo { height: 50px; width: auto; }
.nav-links {
    display: flex;
    gap: 2rem;
    font-size: 0.875rem;
    font-weight: 500;
}
.nav-link { color: var(--text-muted); padding: 0 0.5rem; transition: color 0.2s; }
.nav-link:hover, .nav-link.current { color: #fff; }
.nav-register { padding: 0.625rem 1.5rem; border-radius: 999px; font-weight: 600; }

.nav-mobile { display: none; }

@media (max-width: 934px) {
    .nav-desktop { display: none; }
    .nav-mobile { display: block; }
}

.burger {
    position: relative;
    z-index: 10001;
    width: 2.5rem;
    height: 2.5rem;
    background: none;
    border: 0;
    display: flex;
    flex-direction: column;
    justify-content: center;
    gap: 6px;
}
.burger .bar {
    display: block;
    height: 2px;
    width: 100%;
    background: #fff;
    transition: transform 0.3s, opacity 0.3s;
}
.burger.active .bar:nth-child(1) { transform: translateY(8px) rotate(45deg); }
.burger.active .bar:nth-child(2) { opacity: 0; }
.burger.active .bar:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }

.menu-overlay {
    position: fixed;
    inset: 0;
    z-index: 9999;
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(4px);
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.3s;
}
.menu-overlay.open { opacity: 1; pointer-events: auto; }

.menu-panel {
    position: fixed;
    top: 0;
    right: 0;
    z-index: 10000;
    height: 100%;
    width: 20rem;
    max-width: 85vw;
    padding: 6rem 1.5rem 2rem;
    display: flex;
    flex-direction: column;
    gap: 1rem;
    overflow-y: auto;
    background: linear-gradient(180deg, rgba(15, 15, 25, 0.98), rgba(10, 10, 20, 0.98));
    border-left: 1px solid rgba(108, 99, 255, 0.2);
    transform: translateX(100%);
    transition: transform 0.3s ease-out;
}
.menu-panel.open { transform: none; }
.menu-link { font-size: 1.125rem; font-weight: 600; padding: 0.5rem 0; color: var(--text-muted); }
.menu-link.current, .menu-link:hover { color: #fff; }
.menu-register { margin-top: 1rem; padding: 0.625rem 1.5rem; border-radius: 999px; text-align: center; }

/* Hero */

.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 8rem 0 5rem;
}
.hero-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 4rem;
    align-items: center;
}
@media (min-width: 1024px) {
    .hero-grid { grid-template-columns: 1fr 1fr; }
}
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    margin-bottom: 2rem;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 500;
    color: var(--indigo-light);
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid var(--border);
}
.hero-title {
    font-size: clamp(3rem, 7vw, 4.5rem);
    line-height: 1.1;
    letter-spacing: -0.02em;
    margin: 0 0 2rem;
}
.hero-mission { color: var(--text-soft); max-width: 32rem; margin: 0 0 2.5rem; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; }
.hero-aside { position: relative; display: grid; gap: 2rem; }
.hero-glow {
    position: absolute;
    inset: 12%;
    border-radius: 50%;
    background: rgba(79, 70, 229, 0.2);
    filter: blur(100px);
    pointer-events: none;
    animation: pulse 4s ease-in-out infinite;
}
@keyframes pulse { 50% { opacity: 0.5; } }

.quote-card { position: relative; z-index: 1; margin: 0; padding: 2.5rem; border-radius: 1.5rem; }
.quote-arabic {
    margin: 0 0 1rem;
    font-family: var(--font-arabic);
    font-size: 1.75rem;
    line-height: 2;
    text-align: right;
    color: #e0e7ff;
}
.quote-translation {
    color: var(--text-muted);
    font-size: 0.875rem;
    font-style: italic;
    padding-left: 1rem;
    border-left: 2px solid rgba(99, 102, 241, 0.3);
}
.quote-commentary { color: var(--text-soft); font-size: 0.875rem; margin: 0; }

/* Hero cube */

.hero-cube {
    position: relative;
    z-index: 1;
    aspect-ratio: 1;
    width: min(100%, 28rem);
    margin: 0 auto;
    user-select: none;
}
.hero-cube.clickable { cursor: pointer; }
.hero-cube.interactive { cursor: ew-resize; }
.cube-placeholder, .cube-frame {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: contain;
}
.cube-placeholder.hidden { opacity: 0; }
.cube-frame { opacity: 0; transition: opacity 110ms linear; }
.cube-frame:not([src]) { visibility: hidden; }
.cube-frame.visible { opacity: 1; }
.cube-progress {
    position: absolute;
    left: 10%;
    right: 10%;
    bottom: 0;
    height: 1.5rem;
    font-size: 0.75rem;
    color: var(--text-muted);
    text-align: center;
}
.cube-progress-bar {
    height: 3px;
    border-radius: 3px;
    margin-bottom: 0.25rem;
    background: linear-gradient(90deg, var(--indigo), var(--purple));
    transition: width 0.2s;
}
.cube-hint {
    position: absolute;
    left: 50%;
    bottom: 0;
    transform: translateX(-50%);
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.375rem 0.875rem;
    border-radius: 999px;
    font-size: 0.75rem;
    color: var(--text-soft);
    background: rgba(0, 0, 0, 0.4);
    pointer-events: none;
}
.cube-hint.subtle { background: none; color: var(--text-muted); }

/* Stats */

.stats { margin-bottom: 8rem; }
.stats-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
@media (min-width: 768px) {
    .stats-grid { grid-template-columns: repeat(4, 1fr); gap: 2rem; }
}
.stat-card { padding: 2rem 1.5rem; text-align: center; }
.stat-value {
    margin: 0 0 0.75rem;
    font-size: clamp(2.25rem, 5vw, 3rem);
    font-weight: 700;
    background: linear-gradient(180deg, #fff, #c7d2fe, rgba(255, 255, 255, 0.6));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.stat-label {
    margin: 0;
    font-size: 0.8rem;
    font-weight: 600;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    color: rgba(165, 180, 252, 0.8);
}

/* Objectives */

.objectives-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
@media (min-width: 768px) {
    .objectives-grid { grid-template-columns: repeat(2, 1fr); }
}
.objective-card { padding: 2.5rem; border-radius: var(--radius-lg); }
.objective-icon {
    width: 3.5rem;
    height: 3.5rem;
    margin-bottom: 1.5rem;
    border-radius: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border: 1px solid;
}
.accent-indigo { color: #818cf8; background: rgba(99, 102, 241, 0.1); border-color: rgba(99, 102, 241, 0.2); }
.accent-purple { color: #c084fc; background: rgba(168, 85, 247, 0.1); border-color: rgba(168, 85, 247, 0.2); }
.accent-emerald { color: var(--emerald); background: rgba(16, 185, 129, 0.1); border-color: rgba(16, 185, 129, 0.2); }
.accent-amber { color: var(--amber); background: rgba(245, 158, 11, 0.1); border-color: rgba(245, 158, 11, 0.2); }

/* Events */

.filter-bar { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-bottom: 2.5rem; }
.filter-btn {
    padding: 0.75rem 1.5rem;
    border-radius: 999px;
    font-size: 0.875rem;
    font-weight: 600;
    color: var(--text-muted);
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    transition: transform 0.3s, background 0.3s, color 0.3s;
}
.filter-btn:hover { color: #fff; transform: scale(1.05); }
.filter-btn.active {
    color: #fff;
    border-color: transparent;
    background: linear-gradient(90deg, #4f46e5, var(--purple));
    box-shadow: 0 10px 25px -8px rgba(99, 102, 241, 0.4);
}

.card-grid { display: grid; gap: 1.5rem; }
.events-grid { grid-template-columns: repeat(2, 1fr); }
@media (min-width: 1024px) {
    .events-grid, .speakers-grid { grid-template-columns: repeat(3, 1fr); }
}
.speakers-grid { grid-template-columns: repeat(2, 1fr); }

.event-card { height: 100%; display: flex; flex-direction: column; overflow: hidden; }
.event-card-header {
    padding: 1.5rem;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    background: linear-gradient(135deg, rgba(79, 70, 229, 0.25), rgba(147, 51, 234, 0.2), transparent);
}
.event-badges { display: flex; justify-content: space-between; margin-bottom: 1rem; }
.event-title { margin: 0; font-size: 1.05rem; line-height: 1.35; }
.event-card-body { padding: 1.5rem; flex: 1; display: flex; flex-direction: column; }
.event-speakers { list-style: none; margin: 0 0 1.5rem; padding: 0; flex: 1; }
.event-speakers li { color: var(--text-soft); font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem; }
.event-meta {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: var(--text-soft);
    font-size: 0.875rem;
    margin-bottom: 0.75rem;
}
.event-meta svg { color: #818cf8; flex-shrink: 0; }
.event-duration { margin: 0; color: var(--indigo-light); font-weight: 700; font-size: 0.875rem; }
.empty-state { color: var(--text-muted); text-align: center; padding: 3rem 0; }

/* Speakers */

.speakers { background: rgba(255, 255, 255, 0.02); }
.speaker-card { padding: 2rem; text-align: center; height: 100%; }
.speaker-portrait {
    width: 8rem;
    height: 8rem;
    margin: 0 auto 1.5rem;
    border-radius: 50%;
    overflow: hidden;
    border: 2px solid rgba(99, 102, 241, 0.3);
}
.speaker-portrait img { width: 100%; height: 100%; object-fit: cover; }
.speaker-initials {
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
    font-weight: 700;
    color: #fff;
}
.speaker-name { font-size: 1.375rem; margin: 0 0 0.5rem; }
.speaker-affiliation {
    margin: 0 0 1rem;
    font-size: 0.8rem;
    font-weight: 600;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    color: #818cf8;
}

/* Recent activity */

.activity-title {
    font-size: 1.5rem;
    margin: 0 0 1.5rem;
    padding-left: 1rem;
    border-left: 4px solid var(--indigo);
}
.activity-grid { display: grid; grid-template-columns: 1fr; gap: 1rem; }
@media (min-width: 640px) {
    .activity-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1024px) {
    .activity-grid { grid-template-columns: repeat(4, 1fr); }
}
.activity-card { overflow: hidden; border-radius: 0.75rem; }
.activity-card:hover { transform: scale(1.02); }
.activity-image { position: relative; height: 12rem; overflow: hidden; }
.activity-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
.activity-card:hover .activity-image img { transform: scale(1.1); }
.activity-month {
    position: absolute;
    top: 0.75rem;
    left: 0.75rem;
    padding: 0.25rem 0.625rem;
    border-radius: 0.5rem;
    font-size: 0.75rem;
    font-weight: 700;
    background: rgba(0, 0, 0, 0.6);
}
.activity-body { padding: 1rem; }
.activity-card-title { font-size: 0.875rem; line-height: 1.3; margin: 0 0 0.75rem; }

/* Carousel */

.only-desktop { display: none; }
@media (min-width: 768px) {
    .only-mobile { display: none; }
    .only-desktop { display: grid; }
}

.carousel { position: relative; padding: 0 0.75rem; }
.carousel-viewport { overflow: hidden; touch-action: pan-y; cursor: grab; }
.carousel-viewport:active { cursor: grabbing; }
.carousel-track { display: flex; will-change: transform; }
.carousel-item { flex-shrink: 0; }
.carousel-controls {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    margin-top: 1.5rem;
}
.carousel-btn {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid var(--border);
}
.carousel-dots { display: flex; gap: 0.5rem; }
.carousel-dot {
    width: 0.5rem;
    height: 0.5rem;
    padding: 0;
    border: 0;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.25);
    transition: width 0.3s, background 0.3s;
}
.carousel-dot.active { width: 1.5rem; background: var(--indigo); }

/* Footer */

.footer { background: #000; }
.footer-slogan {
    padding-top: 6rem;
    padding-bottom: 6rem;
    font-size: clamp(2.25rem, 6vw, 4.5rem);
    font-weight: 700;
    line-height: 1.2;
    color: var(--text-muted);
}
.footer-main { border-top: 1px solid #1f2937; padding: 4rem 0; }
.footer-columns { display: grid; grid-template-columns: 1fr; gap: 3rem; }
@media (min-width: 768px) {
    .footer-columns { grid-template-columns: 1fr 1fr; gap: 4rem; }
}
.footer-heading {
    margin: 0 0 1.5rem;
    font-size: 0.75rem;
    font-weight: 600;
    letter-spacing: 0.1em;
    color: var(--text-muted);
}
.footer-list { list-style: none; margin: 0; padding: 0; display: grid; gap: 0.75rem; font-size: 0.875rem; }
.footer-link { transition: color 0.2s; }
.footer-link:hover { color: #818cf8; }
.footer-contact { font-style: normal; display: grid; gap: 1rem; font-size: 0.875rem; }
.contact-row { display: flex; align-items: flex-start; gap: 0.75rem; }
.contact-row p { margin: 0; }
.footer-bottom { border-top: 1px solid #1f2937; padding: 1.5rem 0; }
.footer-bottom-row {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    font-size: 0.75rem;
    color: #6b7280;
}
.footer-copyright { margin: 0; }
.footer-legal, .footer-socials { display: flex; gap: 1.5rem; }
.social-link { color: var(--text-muted); transition: color 0.2s; }
.social-link:hover { color: #fff; }

/* Recovery */

.recovery {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 0 1.5rem;
}
.recovery-card { max-width: 28rem; padding: 2rem; text-align: center; }
.recovery-card h1 { font-size: 1.5rem; margin: 0 0 1rem; }
.recovery-card p { color: var(--text-muted); margin: 0 0 1.5rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_covers_widget_states() {
        for selector in [
            ".reveal.active",
            ".cube-frame.visible",
            ".menu-panel.open",
            ".carousel-dot.active",
            ".filter-btn.active",
            ".only-mobile",
            ".sr-only",
        ] {
            assert!(FEST_CSS.contains(selector), "missing {selector}");
        }
    }
}
