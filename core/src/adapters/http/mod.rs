mod client;

pub use client::HttpSocialApi;
