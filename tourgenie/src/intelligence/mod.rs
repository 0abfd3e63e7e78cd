mod classifier;

pub use classifier::InputClassifier;
