/// Label equivalence table used to merge provisional cluster labels
pub mod equivalence;
/// Hoshen-Kopelman cluster labeling
pub mod labeling;
/// Spanning cluster detection
pub mod spanning;
