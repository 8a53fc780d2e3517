/// Site-wide stylesheet, mounted once by the app shell. Component-local rules
/// live next to their components via `css!`.
pub const GLOBAL_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: #1a1a1a;
    color: #fff;
    font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    -webkit-font-smoothing: antialiased;
}

img { display: block; max-width: 100%; }

a { color: inherit; }

.separator {
    border: none;
    border-top: 1px solid rgba(255, 255, 255, 0.12);
    margin: 0 2rem;
}

.section-heading h2 {
    font-size: clamp(2rem, 4vw, 45px);
    font-weight: 500;
    letter-spacing: -0.03em;
    line-height: 1.1;
    margin: 0 0 3rem;
}

.section-subheading p {
    font-size: clamp(1.1rem, 2vw, 22px);
    color: #d1d5db;
    margin: 0 0 4rem;
}

/* header */
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 60;
    transition: transform 0.8s cubic-bezier(0.33, 0.66, 0.66, 1);
}

.header-bar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 2rem;
}

.header-logo {
    font-size: 1.5rem;
    font-weight: 600;
    text-decoration: none;
}

.header-actions {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.header-spacer { height: 76px; }

.hamburger {
    position: relative;
    width: 44px;
    height: 44px;
    background: none;
    border: none;
    cursor: pointer;
}

.hamburger .line {
    position: absolute;
    left: 10px;
    width: 24px;
    height: 2px;
    background: #fff;
    transition: transform 0.4s ease, opacity 0.3s ease;
}

.hamburger .line.top { top: 15px; }
.hamburger .line.middle { top: 21px; }
.hamburger .line.bottom { top: 27px; }
.hamburger.open .line.top { transform: translateY(6px) rotate(45deg); }
.hamburger.open .line.middle { opacity: 0; }
.hamburger.open .line.bottom { transform: translateY(-6px) rotate(-45deg); }

.menu-curtain {
    position: fixed;
    inset: 0;
    z-index: 55;
    pointer-events: none;
}

.menu-curtain.interactive { pointer-events: auto; }

.curtain-panels {
    position: absolute;
    inset: 0;
    display: flex;
}

.curtain-panel {
    flex: 1;
    background: #111;
    transform: translateY(-100%);
    transition: transform 0.6s cubic-bezier(0.76, 0, 0.24, 1);
}

.curtain-panel.down { transform: translateY(0); }

.menu-content {
    position: relative;
    height: 100%;
    display: flex;
    flex-direction: column;
    justify-content: center;
    padding: 0 2rem;
}

.menu-nav ul {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    list-style: none;
    margin: 0;
    padding: 0;
}

.menu-nav li { overflow: hidden; }

.menu-link {
    background: none;
    border: none;
    color: #fff;
    text-align: left;
    font-size: clamp(2rem, 6vw, 4rem);
    font-weight: 500;
    cursor: pointer;
    padding: 0;
}

.menu-socials { display: flex; gap: 1.5rem; margin-top: 3rem; }
.social-arrow { margin-left: 0.25rem; }

/* intro */
.web-open {
    position: fixed;
    inset: 0;
    z-index: 100;
    pointer-events: auto;
}

.web-open.exiting { pointer-events: none; }

.web-open-slice {
    position: absolute;
    left: 0;
    right: 0;
    height: 50%;
    background: #0d0d0d;
    transition: transform 0.8s cubic-bezier(0.76, 0, 0.24, 1);
}

.web-open-slice.top { top: 0; }
.web-open-slice.bottom { bottom: 0; }
.web-open.exiting .web-open-slice.top { transform: translateY(-100%); }
.web-open.exiting .web-open-slice.bottom { transform: translateY(100%); }

.web-open-dim {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.4);
    transition: opacity 0.6s ease;
}

.web-open.exiting .web-open-dim { opacity: 0; }

.web-open-cta {
    position: absolute;
    top: 50%;
    left: 50%;
    transform: translate(-50%, -50%);
    transition: opacity 0.5s ease;
}
.web-open.exiting .web-open-cta { opacity: 0; }

/* hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    padding: 0 2rem 4rem;
    overflow: hidden;
}

.hero-glow {
    position: absolute;
    inset: -20% -10% auto;
    height: 80%;
    background: radial-gradient(circle at 50% 40%, rgba(13, 206, 141, 0.15), transparent 60%);
    pointer-events: none;
}

.hero-accent {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    height: 2px;
    background: rgba(255, 255, 255, 0.2);
    transform: scaleX(0);
    transform-origin: left;
    transition: transform 1.2s ease;
}

.hero-accent.risen { transform: scaleX(1); }

.hero-orb {
    position: absolute;
    top: 5rem;
    right: 2.5rem;
    width: 5rem;
    height: 5rem;
    border-radius: 50%;
    background: linear-gradient(135deg, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0.05));
    filter: blur(24px);
    pointer-events: none;
}

.hero-orb.floating { animation: bob 6s ease-in-out infinite; }

@keyframes bob {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-10px); }
}

.hero-headline h1 {
    font-size: clamp(3rem, 9vw, 140px);
    font-weight: 500;
    letter-spacing: -0.04em;
    line-height: 0.95;
    margin: 0;
}

.hero-line { display: block; overflow: hidden; }
.hero-word { display: inline-block; margin-right: 0.25em; }

.floating-text { animation: float 6s ease-in-out infinite; }

@keyframes float {
    0%, 100% { translate: 0 0; }
    50% { translate: 0 -6px; }
}

.hero-tagline {
    display: grid;
    grid-template-columns: 1fr 1fr;
    margin-top: 2rem;
    font-size: 1.25rem;
    color: rgba(255, 255, 255, 0.8);
}

.scroll-indicator {
    position: absolute;
    bottom: 1.5rem;
    left: 50%;
}

.scroll-indicator::after {
    content: "";
    display: block;
    width: 1px;
    height: 24px;
    margin: 0.5rem auto 0;
    background: currentColor;
    animation: drip 2s infinite;
}

@keyframes drip {
    0%, 100% { transform: scaleY(0.3); transform-origin: top; }
    50% { transform: scaleY(1); transform-origin: top; }
}

/* content sections */
.brand-strategy, .brand-clarity, .services, .why-choose-us, .thumbnails {
    padding: 6rem 2rem;
}

.split-grid {
    display: grid;
    grid-template-columns: 3fr 7fr;
    gap: 3rem;
}

.split-image img, .clarity-image img, .process-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    border-radius: 8px;
}

.split-image { height: 24rem; }
.lead { font-size: clamp(1.1rem, 2vw, 28px); line-height: 1.2; margin: 0 0 2rem; }

.clarity-image { height: 20rem; margin-bottom: 2rem; }
.clarity-copy { max-width: 70%; font-size: clamp(1rem, 1.6vw, 22px); line-height: 1.6; }
.clarity-cta { padding-top: 1.5rem; }

.service-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
}

.service-card {
    height: 100%;
    padding: 2rem;
    border: 1px solid rgba(255, 255, 255, 0.12);
    border-radius: 12px;
}

.service-card ul { padding-left: 1.1rem; color: #d1d5db; }

.process-steps { display: flex; flex-direction: column; gap: 5rem; }

.process-step {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
}

.process-number { font-weight: 500; margin: 0 0 0.5rem; }
.process-head h3 { font-size: clamp(1.8rem, 3vw, 40px); font-weight: 500; margin: 0 0 1.5rem; }
.process-image { height: 24rem; }
.process-description { color: #d1d5db; line-height: 1.7; margin-top: 6rem; }

/* work */
.section-title h2 { font-size: clamp(2rem, 4vw, 64px); font-weight: 500; margin: 0 0 3rem; }

.thumbnail-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1rem;
}

.thumbnail-button {
    display: block;
    width: 100%;
    height: 100%;
    padding: 0;
    border: none;
    background: none;
    color: inherit;
    text-align: left;
    cursor: pointer;
}

.project-card { height: 100%; display: flex; flex-direction: column; }

.thumbnail-image { flex: 1; overflow: hidden; border-radius: 8px; min-height: 16rem; }

.thumbnail-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.7s ease;
}

.thumbnail-button:hover .thumbnail-image img { transform: scale(1.04); }

.thumbnail-caption h3 { margin: 0.75rem 0 0.25rem; font-weight: 500; }
.thumbnail-caption p { margin: 0; color: rgba(255, 255, 255, 0.6); }

@media (min-width: 768px) {
    .thumbnail-grid {
        grid-template-columns: repeat(3, 1fr);
        grid-auto-rows: 18rem;
    }

    .thumbnail {
        grid-column: span var(--col-span, 1);
        grid-row: span var(--row-span, 1);
    }
}

/* project overlay */
.project-overlay {
    position: fixed;
    inset: 0;
    z-index: 80;
    overflow-y: auto;
    background: #1a1a1a;
    padding: 2rem;
}

.overlay-back button {
    display: inline-flex;
    gap: 0.5rem;
    background: none;
    border: none;
    color: #fff;
    font-size: 1rem;
    cursor: pointer;
}

.overlay-headline h1 { font-size: clamp(2rem, 5vw, 72px); font-weight: 500; margin: 3rem 0; }

.overlay-body { display: grid; grid-template-columns: 3fr 2fr; gap: 3rem; }
.overlay-text p { font-size: 1.2rem; line-height: 1.6; }
.overlay-details { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.overlay-detail p { margin: 0; }
.overlay-detail-label { color: rgba(255, 255, 255, 0.5); font-size: 0.85rem; margin-bottom: 0.25rem !important; }
.overlay-detail ul { margin: 0; padding-left: 1rem; }

.overlay-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 2rem 0; }

.tag {
    padding: 0.25rem 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.3);
    border-radius: 9999px;
    font-size: 0.85rem;
}

.overlay-images { display: flex; flex-direction: column; gap: 1.5rem; margin-top: 3rem; }
.overlay-image img { width: 100%; border-radius: 8px; }
.overlay-empty { padding: 4rem 0; text-align: center; color: rgba(255, 255, 255, 0.5); }
.overlay-bottom-pad { height: 6rem; }

/* popups */
.popup-backdrop {
    position: fixed;
    inset: 0;
    z-index: 90;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.7);
    animation: fade-in 0.4s ease forwards;
}

.popup-backdrop.closing { animation: fade-out 0.4s ease forwards; }

.popup-card {
    position: relative;
    width: min(960px, 92vw);
    max-height: 90vh;
    overflow-y: auto;
    padding: 2.5rem;
    background: #222;
    border-radius: 16px;
    animation: rise-in 0.4s ease forwards;
}

.popup-card.closing { animation: sink-out 0.4s ease forwards; }

.popup-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    background: none;
    border: none;
    color: #fff;
    font-size: 1.25rem;
    cursor: pointer;
}

@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes fade-out { from { opacity: 1; } to { opacity: 0; } }
@keyframes rise-in { from { opacity: 0; transform: translateY(24px); } to { opacity: 1; transform: none; } }
@keyframes sink-out { from { opacity: 1; transform: none; } to { opacity: 0; transform: translateY(24px); } }

.about-founder { display: flex; gap: 1.5rem; align-items: center; }
.about-avatar { width: 96px; height: 96px; border-radius: 50%; object-fit: cover; }
.about-socials { display: flex; gap: 1rem; margin-top: 1.5rem; }

.pricing-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.package-card { padding: 2rem; border: 1px solid rgba(255, 255, 255, 0.15); border-radius: 12px; }
.package-header { display: flex; justify-content: space-between; align-items: baseline; }
.package-section ul { padding-left: 1.1rem; color: #d1d5db; }
.package-notes { font-size: 0.85rem; color: rgba(255, 255, 255, 0.6); }
.package-cta { margin-top: 1.5rem; }

/* contact form */
.contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }

.contact-form input[type="text"],
.contact-form input[type="email"],
.contact-form textarea {
    width: 100%;
    padding: 0.85rem 1rem;
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.25);
    border-radius: 8px;
    color: #fff;
    font: inherit;
}

.contact-form textarea { min-height: 140px; resize: vertical; }
.form-label { font-weight: 500; margin: 0 0 0.75rem; }
.form-services { display: flex; flex-wrap: wrap; gap: 1rem; }
.form-checkbox { display: inline-flex; align-items: center; gap: 0.5rem; cursor: pointer; }

.form-submit {
    align-self: flex-start;
    padding: 0.85rem 2rem;
    border: none;
    border-radius: 9999px;
    background: #fff;
    color: #000;
    font-weight: 600;
    cursor: pointer;
}

.form-submit:disabled { opacity: 0.6; cursor: wait; }

.success-banner {
    margin-bottom: 1rem;
    padding: 0.75rem 1rem;
    border-radius: 8px;
    background: #0dce8d;
    color: #000;
    font-weight: 500;
}

/* footer */
.site-footer { padding: 6rem 2rem 2rem; border-top: 1px solid rgba(255, 255, 255, 0.12); }
.footer-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; }
.footer-chat h2 { font-size: 36px; font-weight: 400; margin: 0 0 1.5rem; }
.footer-chat p { color: rgba(255, 255, 255, 0.8); }
.footer-ctas { display: flex; flex-direction: column; gap: 1rem; margin-top: 2rem; }
.footer-form h3 { font-size: 36px; font-weight: 500; margin: 0 0 1.5rem; }

.footer-bottom {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-top: 5rem;
    color: rgba(255, 255, 255, 0.6);
}

.social-links { display: flex; gap: 1.5rem; list-style: none; padding: 0; margin: 0; }
.social-links a { text-decoration: none; }

.not-found {
    min-height: 70vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
}

.not-found h1 { font-size: 6rem; margin: 0; }

@media (max-width: 767px) {
    .split-grid, .service-grid, .process-step, .overlay-body,
    .pricing-grid, .form-row, .footer-grid { grid-template-columns: 1fr; }
    .clarity-copy { max-width: none; }
    .process-description { margin-top: 0; }
    .hero-tagline { grid-template-columns: 1fr; }
    .footer-bottom { flex-direction: column; gap: 1rem; }
}
"#;
