mod logs;
mod month_window;
mod shutdown;

pub use self::logs::Logger;
pub use self::month_window::month_to_date_window;
pub use self::shutdown::shutdown_signal;
