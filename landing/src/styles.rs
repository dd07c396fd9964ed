//! CSS for the landing page.
//!
//! Injected once as a `<style>` element by [`crate::App`].

/// Complete stylesheet: navy / signal-red palette, Rajdhani headings over
/// IBM Plex Mono body text.
pub const LANDING_CSS: &str = r#"
:root {
    --navy: #1B1F4B;
    --navy-deep: #0F1229;
    --red: #C62828;
    --red-dark: #A91D1D;
    --text-light: #e5e7eb;
    --text-muted: #9ca3af;
    --font-heading: 'Rajdhani', system-ui, sans-serif;
    --font-body: 'IBM Plex Mono', ui-monospace, monospace;
    --container-max: 1280px;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    min-height: 100vh;
    background: #fff;
    color: var(--navy);
    font-family: var(--font-body);
}

h1, h2, h3 { font-family: var(--font-heading); margin: 0; }

button { font: inherit; cursor: pointer; background: none; border: 0; color: inherit; }

.container { max-width: var(--container-max); margin: 0 auto; padding: 0 24px; }

/* Navigation */
.nav {
    position: fixed; top: 0; left: 0; right: 0; z-index: 50;
    padding: 16px 24px;
    background: transparent;
    transition: background 300ms, box-shadow 300ms;
}
.nav.nav-solid {
    background: rgba(27, 31, 75, 0.95);
    backdrop-filter: blur(4px);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
}
.nav-inner { max-width: var(--container-max); margin: 0 auto; display: flex; align-items: center; justify-content: space-between; }
.nav-brand img { display: block; object-fit: cover; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3); }
.nav-links { display: flex; gap: 32px; align-items: center; }
.nav-link { color: #fff; font-size: 14px; font-weight: 500; padding-bottom: 4px; border-bottom: 2px solid transparent; transition: color 200ms, transform 200ms; }
.nav-link:hover { color: var(--red); transform: scale(1.05); }
.nav-link.active { color: var(--red); border-bottom-color: var(--red); }
.nav-toggle { display: none; color: #fff; }
.nav-toggle .chevron { display: inline-flex; transition: transform 200ms; }
.nav-toggle .chevron.open { transform: rotate(180deg); }
.nav-mobile {
    display: none; flex-direction: column; gap: 16px;
    margin-top: 8px; padding: 16px; border-radius: 12px;
    background: rgba(27, 31, 75, 0.95);
}
.nav-mobile .nav-link { font-size: 18px; text-align: left; }

@media (max-width: 768px) {
    .nav-links { display: none; }
    .nav-toggle { display: inline-flex; }
    .nav-mobile { display: flex; }
}

/* Hero */
.hero { position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center; overflow: hidden; background: var(--navy); }
.hero-bg { position: absolute; inset: 0; }
.hero-bg img { width: 100%; height: 100%; object-fit: cover; opacity: 0.3; filter: blur(4px); }
.hero-bg::after { content: ""; position: absolute; inset: 0; background: linear-gradient(to top, rgba(27, 31, 75, 0.65), rgba(27, 31, 75, 0.5), rgba(27, 31, 75, 0.35)); }
.hero-content { position: relative; z-index: 10; text-align: center; padding: 0 24px; max-width: 1152px; }
.hero-title { font-size: clamp(3rem, 8vw, 8rem); line-height: 0.9; color: #fff; margin-bottom: 24px; }
.hero-subtitle { font-size: 20px; color: var(--text-light); max-width: 768px; margin: 0 auto 48px; line-height: 1.6; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 24px; justify-content: center; }

.btn { min-height: 56px; padding: 16px 32px; font-family: var(--font-heading); font-weight: 600; font-size: 18px; transition: all 300ms; }
.btn:hover { transform: scale(1.05); }
.btn-primary { background: var(--red); color: #fff; }
.btn-primary:hover { background: var(--red-dark); }
.btn-outline { border: 2px solid #fff; color: #fff; }
.btn-outline:hover { background: #fff; color: var(--navy); }

/* Shared section chrome */
.section { padding: 96px 0; }
.section-title { font-size: clamp(2.25rem, 5vw, 3.75rem); margin-bottom: 24px; text-align: center; }
.section-title .accent { color: var(--red); }
.section-lead { max-width: 768px; margin: 0 auto 16px; text-align: center; line-height: 1.7; color: #4b5563; }

/* Divisions */
.division-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; margin-top: 48px; }
.division-card { padding: 32px; border: 1px solid #e5e7eb; transition: box-shadow 300ms, transform 300ms; }
.division-card:hover { box-shadow: 0 20px 40px rgba(27, 31, 75, 0.15); transform: translateY(-4px); }
.division-card .icon { color: var(--red); margin-bottom: 16px; }
.division-card h3 { font-size: 24px; margin-bottom: 8px; }
.division-card p { color: #4b5563; line-height: 1.6; margin: 0; }

/* Impact */
.impact { background: linear-gradient(to bottom right, var(--navy), var(--navy-deep)); color: #fff; }
.impact .section-title { color: #fff; }
.stat-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 48px; margin: 48px 0 80px; }
.stat-card { text-align: center; }
.stat-value { font-family: var(--font-heading); font-weight: 700; font-size: clamp(3rem, 6vw, 4.5rem); color: var(--red); margin-bottom: 16px; text-shadow: 0 0 40px var(--red), 0 0 80px var(--red); font-variant-numeric: tabular-nums; }
.stat-label { font-size: 14px; color: #d1d5db; text-transform: uppercase; letter-spacing: 0.05em; }
.impact-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; }
.impact-card { padding: 32px; background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.1); }
.impact-card .icon { color: var(--red); margin-bottom: 12px; }
.impact-card h3 { font-size: 22px; margin-bottom: 8px; }
.impact-card p { color: var(--text-muted); margin: 0; line-height: 1.6; }

/* Partners */
.partner-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 16px; margin-top: 48px; }
.partner-card { aspect-ratio: 3 / 2; display: flex; align-items: center; justify-content: center; border: 1px solid #e5e7eb; font-family: var(--font-heading); font-size: 24px; color: #9ca3af; }

/* Call to action */
.cta-band { background: var(--red); color: #fff; padding: 80px 0; text-align: center; }
.cta-band h2 { font-size: clamp(2rem, 4vw, 3rem); margin-bottom: 16px; }
.cta-band p { max-width: 640px; margin: 0 auto 32px; line-height: 1.6; }
.cta-band .btn-outline:hover { color: var(--red); }

/* Footer */
.footer { background: var(--navy-deep); color: var(--text-light); padding: 64px 0 32px; }
.footer-grid { display: flex; flex-wrap: wrap; gap: 48px; justify-content: space-between; }
.footer h3 { font-size: 24px; margin-bottom: 16px; color: #fff; }
.contact-line { display: flex; gap: 12px; align-items: center; margin-bottom: 12px; }
.contact-line a { color: inherit; text-decoration: none; }
.contact-line a:hover, .social-links a:hover { color: var(--red); }
.social-links { display: flex; gap: 16px; }
.social-links a { color: var(--text-light); }
.footer-bottom { margin-top: 48px; padding-top: 24px; border-top: 1px solid rgba(255, 255, 255, 0.1); display: flex; justify-content: space-between; font-size: 13px; color: var(--text-muted); }
.back-to-top { display: inline-flex; gap: 6px; align-items: center; color: var(--text-muted); }
.back-to-top:hover { color: #fff; }
"#;

#[cfg(test)]
mod tests {
    use super::LANDING_CSS;

    #[test]
    fn stylesheet_covers_state_classes() {
        // classes toggled at runtime must exist in the stylesheet
        for selector in [".nav.nav-solid", ".nav-link.active", ".chevron.open"] {
            assert!(LANDING_CSS.contains(selector), "missing {selector}");
        }
    }
}
