//! Data models for the book service

pub mod book;

pub use book::{Book, BookCreated, CreateBook, MessageResponse, NewBook, UpdateBook};
