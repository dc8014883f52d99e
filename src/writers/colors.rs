use crossterm::style::Color;

// Score lines
pub fn win_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn lose_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn tie_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn time_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn misc_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn header_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue

// Standings zones
pub fn cl_position_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn el_position_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn rl_position_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn position_fg() -> Color {
    Color::AnsiValue(15)
} // White

// Messages
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn notice_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
