mod bounds;
mod lifecycle;
