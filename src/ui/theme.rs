use ratatui::style::Color;

pub struct Theme {
    pub bg: Color, // Keypad background
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub digit: Color,
    pub operator: Color,
    pub function: Color,
    pub control: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub display_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    digit: Color::Rgb(205, 214, 244),          // Plain text for digits
    operator: Color::Rgb(250, 179, 135),       // Orange for operators
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    control: Color::Rgb(243, 139, 168),        // Red for clear/delete keys
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for the keypad cursor
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    status_bg: Color::Rgb(50, 50, 70),         // Slightly lighter BG for the status bar
    display_bg: Color::Rgb(24, 24, 37),        // Darker BG for the LCD
};
