mod application;
mod layout;
mod license;
mod notification;
mod payment;
mod station;
mod user;
