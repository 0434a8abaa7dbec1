/// Size of each logic-grid category. The three categories are always the same
/// six people, six instruments and six cities; only the pairings vary.
pub const CATEGORY_SIZE: usize = 6;

pub const PEOPLE: [&str; CATEGORY_SIZE] = ["Ava", "Bruno", "Celia", "Dmitri", "Elena", "Farid"];

pub const INSTRUMENTS: [&str; CATEGORY_SIZE] =
    ["banjo", "cello", "drums", "flute", "guitar", "harp"];

pub const CITIES: [&str; CATEGORY_SIZE] =
    ["Athens", "Bergen", "Cairo", "Denver", "Edinburgh", "Fukuoka"];
