// UFUQ 2026 landing page, Leptos 0.8 CSR
// Developed by the UFUQ Web Team (c)2025

fn main() {
    fest_landing::run();
}
