mod monetary;
#[cfg(test)]
mod tests;

pub use monetary::Usd;
