use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 138, g: 180, b: 248 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 203, b: 107 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const AVAILABLE: Color = Color::Green;
pub const ON_LOAN: Color = Color::Yellow;
pub const OVERDUE: Color = Color::Red;
pub const MONEY: Color = Color::TrueColor { r: 195, g: 232, b: 141 };
