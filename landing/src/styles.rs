//! Base stylesheet. Layout and color come from Tailwind utility classes
//! (loaded by `index.html`); this only covers what utilities cannot.

/// Font import, body reset and smooth anchor scrolling.
pub const BASE_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap');
body {
    font-family: 'Inter', sans-serif;
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}
html {
    scroll-behavior: smooth;
}
"#;
