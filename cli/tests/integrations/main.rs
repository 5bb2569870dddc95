mod calls;
mod eval;
mod greeting;
