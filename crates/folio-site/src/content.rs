//! Copy, palette and project data for the page.

use folio_ui::prelude::*;

// ── palette ───────────────────────────────────────────────────────────────

pub mod palette {
    use folio_ui::prelude::Color;

    pub fn paper() -> Color { Color::from_hex(0xf4f1ea) }
    pub fn ink() -> Color { Color::from_hex(0x1a1a1a) }
    pub fn rose_50() -> Color { Color::from_hex(0xfff1f2) }
    pub fn rose_400() -> Color { Color::from_hex(0xfb7185) }
    pub fn rose_600() -> Color { Color::from_hex(0xe11d48) }
    pub fn rose_900() -> Color { Color::from_hex(0x881337) }
    pub fn blue_50() -> Color { Color::from_hex(0xeff6ff) }
    pub fn blue_400() -> Color { Color::from_hex(0x60a5fa) }
    pub fn blue_900() -> Color { Color::from_hex(0x1e3a8a) }
    pub fn stone_50() -> Color { Color::from_hex(0xfafaf9) }
    pub fn stone_800() -> Color { Color::from_hex(0x292524) }
    pub fn gray_100() -> Color { Color::from_hex(0xf3f4f6) }
    pub fn gray_400() -> Color { Color::from_hex(0x9ca3af) }
    pub fn gray_500() -> Color { Color::from_hex(0x6b7280) }
}

// ── header ────────────────────────────────────────────────────────────────

pub const NAME: &str = "Tanveer\nSingh";
pub const TAGLINE: &str = "The interface between\nLogic & The Unconscious";
pub const SOCIAL_LINKS: [(&str, &str); 3] = [("Git", "#"), ("Lnkd", "#"), ("Mail", "#")];

// ── projects ──────────────────────────────────────────────────────────────

pub const ARTIFACTS_HEADING: &str = "(01) Artifacts";
pub const ARTIFACTS_HINT: &str = "Hover to reveal structure";

/// Window width from which the mosaic uses three columns and the cards
/// their full spans.
pub const WIDE_GRID: f32 = 1024.0;
/// Window width from which the page switches to its two-column layouts.
pub const MEDIUM: f32 = 768.0;

const PATTERN_TILE: f32 = 40.0;

/// A project card and the cells it covers in the mosaic.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub card: CardContent,
    pub span: Span,
}

pub fn projects() -> Vec<Project> {
    let transparent = Color::transparent();
    vec![
        Project {
            card: CardContent {
                title: "AI Confidence Scorer".into(),
                tagline: "Python / PyTorch".into(),
                concept: "Quantifying the 'doubt' of a machine.".into(),
                background_pattern: Pattern::new(
                    PatternKind::Stripes { angle_deg: 45.0, period: 10.0, line: 2.0 },
                    transparent,
                    Color::from_hex(0xf0f0f0),
                    PATTERN_TILE,
                )
                .with_highlight(Vec2::new(0.3, 0.2), 0.5, Color::from_hex(0xe1e1e1)),
                accent_color: Color::from_hex(0x2a2a2a),
                accent_text_color: Color::white(),
                is_vertical: false,
            },
            span: Span::new(2, 1).from_width(WIDE_GRID),
        },
        Project {
            card: CardContent {
                title: "Dream Logic Engine".into(),
                tagline: "React / D3.js".into(),
                concept: "Mapping subconscious narratives to visual archetypes.".into(),
                background_pattern: Pattern::new(
                    PatternKind::Sweep,
                    palette::paper(),
                    Color::from_hex(0xe0dcd3),
                    PATTERN_TILE,
                ),
                accent_color: palette::rose_900(),
                accent_text_color: palette::rose_50(),
                is_vertical: true,
            },
            span: Span::new(1, 2).from_width(WIDE_GRID),
        },
        Project {
            card: CardContent {
                title: "BlueNote SQL".into(),
                tagline: "PostgreSQL / Node".into(),
                concept: "Preserving analog history in digital stasis.".into(),
                background_pattern: Pattern::new(
                    PatternKind::Rings { period: 10.0 },
                    Color::from_srgb_u8(0xdc, 0xdc, 0xdc, 0x55),
                    palette::paper(),
                    PATTERN_TILE,
                ),
                accent_color: palette::blue_900(),
                accent_text_color: palette::blue_50(),
                is_vertical: false,
            },
            span: Span::ONE,
        },
        Project {
            card: CardContent {
                title: "Entropy Visualizer".into(),
                tagline: "WebGL / Three.js".into(),
                concept: "Visualizing chaos within sorted arrays.".into(),
                background_pattern: Pattern::new(
                    PatternKind::Diamonds { coverage: 0.25 },
                    transparent,
                    Color::from_hex(0xe0e0e0),
                    PATTERN_TILE,
                ),
                accent_color: palette::stone_800(),
                accent_text_color: palette::stone_50(),
                is_vertical: false,
            },
            span: Span::ONE,
        },
    ]
}

// ── about ─────────────────────────────────────────────────────────────────

pub const MIND_HEADING: &str = "(02) The Mind";
pub const DIGESTING_HEADING: &str = "\"Currently Digesting\"";
pub const DIGESTING: [(&str, &str); 3] = [
    ("Book", "Siddhartha (Hesse)"),
    ("Theory", "Jungian Shadow"),
    ("Audio", "Modal Jazz 1959"),
];

pub const BIO_LEAD: &str = "I am a Computer Science student seeking the hidden connections between ";
pub const BIO_FIRST_KEY: &str = "algorithmic efficiency";
pub const BIO_JOIN: &str = " and ";
pub const BIO_SECOND_KEY: &str = "human psychology";
pub const BIO_END: &str = ".";

pub const ACTIONS: [(&str, &str); 2] = [("Read Essays", "#"), ("Resume", "#")];

// ── footer ────────────────────────────────────────────────────────────────

pub const COPYRIGHT: &str = "(C) 2025";
pub const LOCATION: &str = "Toronto, CA";
pub const STATUS: &str = "Status: Learning";
