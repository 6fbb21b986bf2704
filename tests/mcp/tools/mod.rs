mod config;
mod modify;
mod usage;
