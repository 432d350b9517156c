//! Label and color helpers for human-readable output.

use owo_colors::OwoColorize;

/// Pokédex number as shown on cards: `#001`.
pub fn format_id(id: u32) -> String {
    format!("#{id:03}")
}

/// Upper-case the first character, leave the rest alone.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Short stat label, falling back to the API name.
pub fn stat_label(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Atk",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        other => other,
    }
}

/// `"lightning-rod"` -> `"Lightning rod"`. Only the first hyphen is replaced.
pub fn ability_label(name: &str) -> String {
    capitalize_first(&name.replacen('-', " ", 1))
}

/// Canonical badge color for a type name.
pub fn type_color(kind: &str) -> (u8, u8, u8) {
    match kind {
        "normal" => (0xA8, 0xA7, 0x7A),
        "fire" => (0xEE, 0x81, 0x30),
        "water" => (0x63, 0x90, 0xF0),
        "electric" => (0xF7, 0xD0, 0x2C),
        "grass" => (0x7A, 0xC7, 0x4C),
        "ice" => (0x96, 0xD9, 0xD6),
        "fighting" => (0xC2, 0x2E, 0x28),
        "poison" => (0xA3, 0x3E, 0xA1),
        "ground" => (0xE2, 0xBF, 0x65),
        "flying" => (0xA9, 0x8F, 0xF3),
        "psychic" => (0xF9, 0x55, 0x87),
        "bug" => (0xA6, 0xB9, 0x1A),
        "rock" => (0xB6, 0xA1, 0x36),
        "ghost" => (0x73, 0x57, 0x97),
        "dragon" => (0x6F, 0x35, 0xFC),
        "dark" => (0x70, 0x57, 0x46),
        "steel" => (0xB7, 0xB7, 0xCE),
        "fairy" => (0xD6, 0x85, 0xAD),
        _ => (0x77, 0x77, 0x77),
    }
}

/// Paint `text` in the color of `kind` when `color` is on.
pub fn paint(text: &str, kind: &str, color: bool) -> String {
    if !color {
        return text.to_owned();
    }
    let (r, g, b) = type_color(kind);
    text.truecolor(r, g, b).bold().to_string()
}

/// Capitalized, comma-separated type list; each type in its own color.
pub fn type_list(types: &[String], color: bool) -> String {
    types
        .iter()
        .map(|t| paint(&capitalize_first(t), t, color))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fixed-width bar for a base stat (255 is the game maximum).
pub fn stat_bar(value: u32, width: u32) -> String {
    let filled = value.min(255) * width / 255;
    let filled = usize::try_from(filled).unwrap_or(0);
    let empty = usize::try_from(width).unwrap_or(0).saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
