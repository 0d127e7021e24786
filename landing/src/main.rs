// Touch Learn landing page, Leptos 0.8 edition
// Developed by the Touch Learn web team (c)2025

fn main() {
    touchlearn_landing::mount();
}
