use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 94, g: 200, b: 240 };
pub const ACCENT: Color = Color::TrueColor { r: 240, g: 180, b: 70 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
