// Terminal front-end for the NBA xPT form.

pub mod tui;
