pub mod demo_screen;
