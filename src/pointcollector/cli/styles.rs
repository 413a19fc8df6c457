use console::Style;
use once_cell::sync::Lazy;

pub struct Styles {
    pub info: Style,
    pub success: Style,
    pub error: Style,
    pub heading: Style,
    pub bar: Style,
    pub total: Style,
}

pub static STYLES: Lazy<Styles> = Lazy::new(|| Styles {
    info: Style::new().dim(),
    success: Style::new().green(),
    error: Style::new().red(),
    heading: Style::new().bold(),
    bar: Style::new().cyan(),
    total: Style::new().blue().bold(),
});
