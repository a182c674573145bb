//! End-to-end lending scenarios driven through the public `Library` facade.

#[cfg(test)]
mod lending;
