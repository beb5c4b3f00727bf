// Palette colours come from the custom properties in static/theme.css; the
// root theme class decides which set is active.

pub const PAGE: &str = "min-h-screen w-full bg-[var(--bg)] text-[var(--text)]";
pub const CONTAINER: &str = "w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_SM: &str = "max-w-md mx-auto px-4 sm:px-6 py-12";
pub const CONTAINER_MD: &str = "max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-12";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12";

pub const NAV: &str = "fixed top-0 z-50 w-full bg-[var(--surface)]/70 backdrop-blur-md border-b border-[var(--border)]";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-[var(--text)] hover:text-[var(--accent)] transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "relative px-3 py-2 text-sm font-medium text-[var(--text-muted)] hover:text-[var(--accent)] transition-all duration-200 after:absolute after:left-0 after:bottom-0 after:h-0.5 after:w-full after:origin-right after:scale-x-0 after:bg-[var(--accent)] after:transition-transform hover:after:origin-left hover:after:scale-x-100";
pub const NAV_LINK_ACTIVE: &str = "relative px-3 py-2 text-sm font-semibold text-[var(--accent)]";
pub const BUTTON_ICON: &str = "p-2 text-[var(--text)] hover:text-[var(--accent)] rounded-lg transition-colors duration-200";

pub const CARD: &str = "bg-[var(--surface)] rounded-lg shadow-lg border border-[var(--border)] p-6";
pub const CARD_HOVER: &str = "bg-[var(--surface)] rounded-lg shadow-lg border border-[var(--border)] hover:shadow-xl p-6 transform hover:-translate-y-1 transition-all duration-300";
pub const CARD_HIGHLIGHT: &str = "bg-[var(--surface)] rounded-lg shadow-xl border-2 border-[var(--accent)] p-6 relative";
pub const CARD_TITLE: &str = "text-lg font-semibold text-[var(--text)]";
pub const CARD_TEXT: &str = "text-sm text-[var(--text-muted)]";
pub const AUTH_CARD: &str = "bg-[var(--surface)]/80 rounded-xl shadow-xl p-8 max-w-md w-full mx-auto backdrop-blur-lg border border-[var(--border)]";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-[var(--accent)] hover:bg-[var(--accent-strong)] shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-50";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-[var(--border)] text-[var(--text)] hover:bg-[var(--surface-alt)] transition-colors duration-200";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700";
pub const AUTH_BUTTON: &str = "w-full py-3 px-4 text-sm font-semibold text-white bg-[var(--accent)] hover:bg-[var(--accent-strong)] rounded-lg transition-all duration-200 transform hover:translate-y-[-1px] hover:shadow-lg focus:outline-none focus:ring-2 focus:ring-[var(--accent)] disabled:opacity-50";

pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-[var(--bg)] py-2 px-3 text-[var(--text)] shadow-sm ring-1 ring-inset ring-[var(--border)] placeholder:text-[var(--text-muted)] focus:ring-2 focus:ring-[var(--accent)]";
pub const INPUT_ERROR: &str = "mt-2 block w-full rounded-lg border-0 bg-[var(--bg)] py-2 px-3 text-[var(--text)] shadow-sm ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-inset focus:ring-red-500 sm:text-sm";
pub const SELECT: &str = "rounded-lg border-0 bg-[var(--surface)] py-1 pl-2 pr-8 text-sm text-[var(--text)] ring-1 ring-inset ring-[var(--border)] focus:ring-2 focus:ring-[var(--accent)]";
pub const FORM: &str = "mt-4 space-y-4";

pub const TEXT_H1: &str = "text-4xl font-bold tracking-tight text-[var(--text)]";
pub const TEXT_H2: &str = "text-2xl font-bold text-[var(--text)]";
pub const TEXT_H3: &str = "text-xl font-semibold text-[var(--text)]";
pub const TEXT_BODY: &str = "text-[var(--text-muted)] leading-7";
pub const TEXT_SMALL: &str = "text-sm text-[var(--text-muted)]";
pub const TEXT_ERROR: &str = "text-sm text-red-500";
pub const TEXT_SUCCESS: &str = "text-sm text-green-500";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-[var(--text)]";
pub const TEXT_HINT: &str = "text-xs text-[var(--text-muted)] mt-1";
pub const LINK: &str = "text-[var(--accent)] hover:text-[var(--accent-strong)] transition-colors duration-200";

pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const ALERT_SUCCESS: &str = "bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg p-4 text-green-700 dark:text-green-200";
pub const ALERT_WARNING: &str = "p-4 mb-4 text-sm text-yellow-800 rounded-lg bg-yellow-50 dark:bg-yellow-900/30 dark:text-yellow-300";
pub const BADGE: &str = "inline-flex items-center px-3 py-1 rounded-full text-xs font-medium";

pub const DROPDOWN: &str = "absolute right-0 bg-[var(--surface)] rounded-lg shadow-lg ring-1 ring-[var(--border)] focus:outline-none divide-y divide-[var(--border)]";
pub const DROPDOWN_BUTTON: &str = "w-full px-2 py-3 text-sm text-center text-[var(--text-muted)] hover:bg-[var(--surface-alt)] hover:text-[var(--accent)] transition-colors duration-200 first:rounded-t-lg last:rounded-b-lg";

pub const FOOTER: &str = "w-full bg-[var(--surface)]/80 backdrop-blur-md border-t border-[var(--border)]";
pub const FOOTER_HEADING: &str = "text-sm font-semibold uppercase tracking-wider text-[var(--text)]";
pub const FOOTER_LINK: &str = "text-sm text-[var(--text-muted)] hover:text-[var(--accent)] transition-colors duration-200";

pub const PROSE: &str = "space-y-4 text-[var(--text-muted)] leading-7";
pub const PROSE_HEADING: &str = "mt-10 mb-3 text-xl font-semibold text-[var(--text)] scroll-mt-24";

// Hero section
pub const HERO_SECTION: &str = "relative flex flex-col items-center justify-center py-24 px-4 text-center";
pub const HERO_TITLE: &str = "text-5xl sm:text-7xl font-black tracking-tight text-transparent bg-clip-text bg-gradient-to-r from-[var(--accent)] to-[var(--accent-alt)]";
pub const HERO_TEXT: &str = "mt-6 text-xl text-[var(--text-muted)] max-w-2xl mx-auto";
pub const HERO_BUTTONS: &str = "mt-10 flex flex-col sm:flex-row justify-center items-center gap-4";
pub const HERO_CTA_BUTTON: &str = "px-8 py-4 text-lg font-semibold text-white bg-gradient-to-r from-[var(--accent)] to-[var(--accent-alt)] rounded-xl transform hover:scale-105 transition-all duration-300 shadow-lg hover:shadow-xl";
pub const FEATURE_GRID: &str = "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6";

pub const SCROLL_PROGRESS: &str = "fixed top-0 left-0 z-[60] h-1 bg-gradient-to-r from-[var(--accent)] to-[var(--accent-alt)] transition-[width] duration-100";
pub const BACK_TO_TOP: &str = "fixed bottom-6 right-6 z-50 p-3 rounded-full shadow-lg text-white bg-[var(--accent)] hover:bg-[var(--accent-strong)] transition-all duration-300";
pub const LOADING_SPINNER: &str = "animate-spin h-5 w-5 text-[var(--accent)]";
