mod controller;
mod error;
mod helpers;
mod verify_client;
