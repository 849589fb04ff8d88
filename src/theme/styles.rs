//! Global CSS styles for Aspect Cards.
//!
//! Cards themselves are inline SVG from `aspectcards_core`, so only the
//! workbench chrome is styled here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Workbench */
  --bench-bg: #1c1917;
  --bench-panel: #292524;
  --bench-border: #44403c;

  /* TEXT */
  --text-primary: #f5f5f4;
  --text-secondary: rgba(245, 245, 244, 0.7);
  --text-muted: rgba(245, 245, 244, 0.5);

  /* SEMANTIC */
  --accent: #a8c7ee;
  --danger: #f2a39c;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --text-label: 11px;
  --text-sm: 14px;
  --text-base: 16px;
  --text-xl: 20px;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--bench-bg);
  color: var(--text-primary);
  line-height: 1.4;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-size: 2rem;
  font-weight: 600;
  letter-spacing: 0.05em;
}

.section-header {
  font-size: 1.25rem;
  font-weight: 500;
}

.text-label { font-size: var(--text-label); letter-spacing: 0.08em; text-transform: uppercase; }
.text-sm { font-size: var(--text-sm); }
.text-base { font-size: var(--text-base); }
.text-xl { font-size: var(--text-xl); font-weight: 600; }
.faded { opacity: 0.9; }

/* === Workbench === */
.workbench {
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 2.5rem;
}

.workbench__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  position: sticky;
  top: 0;
  z-index: 10;
  padding: 1rem 0;
  background: var(--bench-bg);
  border-bottom: 1px solid var(--bench-border);
}

/* === Export Controls === */
.export-controls {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.btn-export {
  padding: 0.6rem 1.4rem;
  background: transparent;
  border: 1px solid var(--bench-border);
  border-radius: 6px;
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-export:hover {
  border-color: var(--accent);
}

.btn-export--primary {
  background: var(--accent);
  border-color: var(--accent);
  color: var(--bench-bg);
}

.export-busy {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.export-busy__spinner {
  width: 14px;
  height: 14px;
  border: 2px solid var(--text-muted);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.export-error {
  color: var(--danger);
}

/* === Regions === */
.region {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.region__header {
  display: flex;
  align-items: baseline;
  gap: 1rem;
}

.region__meta {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.region__sheet {
  width: max-content;
  line-height: 0;
}
"#;
