mod brand;
mod config;
mod lookup;
