#[cfg(test)]
mod enumeration;
