pub mod support;

mod city;
mod country;
mod find;
