#![warn(clippy::complexity)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::suspicious)]

fn main() {
    console_error_panic_hook::set_once();
    seat_finder::boot();
}
