mod benchmark;
mod boundary;
mod properties;
