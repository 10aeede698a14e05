//! Color constants and font size tokens for consistent theming.

#![allow(dead_code)] // Tokens kept as a set even where not yet referenced.

use bevy::prelude::*;

// === Text Colors ===

/// Header/title text color (white).
pub const HEADER_TEXT: Color = Color::WHITE;

/// Body/subtitle text color (light gray).
pub const BODY_TEXT: Color = Color::srgb(0.7, 0.7, 0.7);

/// Score readout (amber, arcade style).
pub const SCORE_TEXT: Color = Color::srgb(1.0, 0.85, 0.0);

/// Victory banner (green).
pub const VICTORY_TEXT: Color = Color::srgb(0.1, 0.9, 0.1);

/// Defeat banner (red).
pub const DEFEAT_TEXT: Color = Color::srgb(0.9, 0.15, 0.15);

// === Menu Colors ===

/// Highlighted menu entry.
pub const MENU_SELECTED: Color = Color::srgb(1.0, 0.85, 0.0);

/// Unselected menu entry.
pub const MENU_ITEM: Color = Color::srgb(0.6, 0.6, 0.65);

// === UI Backgrounds ===

/// Semi-transparent dark overlay for the pause screen.
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);

/// Opaque backdrop for the victory/defeat screens.
pub const ENDGAME_BACKGROUND: Color = Color::srgb(0.02, 0.02, 0.05);

/// Panel background (dark blue-gray, nearly opaque).
pub const PANEL_BACKGROUND: Color = Color::srgba(0.1, 0.1, 0.15, 0.95);

/// Panel border (light blue-gray, semi-transparent).
pub const PANEL_BORDER: Color = Color::srgba(0.5, 0.5, 0.6, 0.8);

// === Entity Colors ===

pub const PLAYER_ONE_SHIP: Color = Color::srgb(0.25, 0.55, 0.95);
pub const PLAYER_TWO_SHIP: Color = Color::srgb(0.9, 0.3, 0.25);
pub const ENEMY_SHIP: Color = Color::srgb(0.55, 0.85, 0.3);
pub const PLAYER_BULLET: Color = Color::srgb(1.0, 1.0, 0.3);
pub const ENEMY_BULLET: Color = Color::srgb(1.0, 0.45, 0.2);
pub const STAR: Color = Color::srgb(0.85, 0.85, 0.95);

// === Font Size Tokens ===

pub const FONT_SIZE_TITLE: f32 = 72.0;
pub const FONT_SIZE_HEADER: f32 = 64.0;
pub const FONT_SIZE_LABEL: f32 = 32.0;
pub const FONT_SIZE_HUD: f32 = 28.0;
pub const FONT_SIZE_PROMPT: f32 = 24.0;
