/// Process adapters shelling out to external tools
mod cargo_tree_comparator;

pub use cargo_tree_comparator::CargoTreeComparator;
