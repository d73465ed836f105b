#![allow(dead_code)]

pub mod db;
pub mod in_memory;
pub mod requests;
