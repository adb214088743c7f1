//! The dashboard's out-of-the-box widget set.
//!
//! Positions are the hand-picked starting points; run them through
//! [`normalize_layout`](crate::normalize_layout) before display.

use crate::geometry::Rect;
use crate::widget::Widget;

const BASE_Z: i32 = 10;

struct Preset {
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    accent: &'static str,
    description: &'static str,
    component: &'static str,
    rect: Rect,
}

const PRESETS: [Preset; 6] = [
    Preset {
        id: "encounter-timeline",
        title: "Encounter Timeline",
        icon: "⏳",
        accent: "linear-gradient(135deg, rgba(255, 138, 92, 0.6), rgba(255, 90, 90, 0.4))",
        description: "Track initiative, rounds, and spotlight moments.",
        component: "EncounterTimeline",
        rect: Rect::new(48, 132, 400, 360),
    },
    Preset {
        id: "momentum-tracker",
        title: "Momentum & Stress",
        icon: "💠",
        accent: "linear-gradient(135deg, rgba(86, 196, 255, 0.6), rgba(86, 132, 255, 0.4))",
        description: "Manage the party's shared resources.",
        component: "MomentumTracker",
        rect: Rect::new(500, 120, 320, 280),
    },
    Preset {
        id: "conditions-ref",
        title: "Conditions Reference",
        icon: "📖",
        accent: "linear-gradient(135deg, rgba(168, 255, 120, 0.55), rgba(65, 211, 168, 0.35))",
        description: "Daggerheart conditions at a glance.",
        component: "ConditionsQuickRef",
        rect: Rect::new(880, 140, 320, 340),
    },
    Preset {
        id: "srd-library",
        title: "SRD Library",
        icon: "📚",
        accent: "linear-gradient(135deg, rgba(255, 216, 102, 0.6), rgba(255, 164, 90, 0.35))",
        description: "Domains, damage, boons, and consequences.",
        component: "SRDLibrary",
        rect: Rect::new(104, 520, 440, 320),
    },
    Preset {
        id: "dice-oracle",
        title: "Dice & Oracles",
        icon: "🎲",
        accent: "linear-gradient(135deg, rgba(255, 120, 221, 0.55), rgba(162, 92, 255, 0.35))",
        description: "Generate rolls and improv prompts.",
        component: "DiceOracle",
        rect: Rect::new(588, 456, 360, 320),
    },
    Preset {
        id: "threats-hooks",
        title: "Threats & Hooks",
        icon: "🕸️",
        accent: "linear-gradient(135deg, rgba(92, 255, 208, 0.55), rgba(92, 164, 255, 0.35))",
        description: "NPCs, looming dangers, and treasure sparks.",
        component: "ThreatsAndHooks",
        rect: Rect::new(964, 488, 360, 340),
    },
];

/// Default widgets, front-most first.
pub fn default_widgets() -> Vec<Widget> {
    PRESETS
        .iter()
        .zip(0..)
        .map(|(preset, depth)| {
            Widget::new(preset.id, preset.rect)
                .with_z_index(BASE_Z - depth)
                .with_field("title", preset.title)
                .with_field("icon", preset.icon)
                .with_field("accent", preset.accent)
                .with_field("description", preset.description)
                .with_field("component", preset.component)
        })
        .collect()
}
