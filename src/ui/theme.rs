use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub highlight_bg: Color,
    pub mark_first: Color,  // X
    pub mark_second: Color, // O
    pub result: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the program frame
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for inner boxes
    highlight_bg: Color::Rgb(50, 50, 70),      // Slightly lighter BG for cursor cell / bars
    mark_first: Color::Rgb(148, 226, 213),     // Cyan
    mark_second: Color::Rgb(245, 194, 231),    // Pink
    result: Color::Rgb(249, 226, 175),         // Yellow
};
