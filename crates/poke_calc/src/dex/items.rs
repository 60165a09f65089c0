//! Item tables: Fling base powers and Natural Gift berry data.

use crate::types::Type;

/// Fling base power per held item.
pub static FLING_POWERS: phf::Map<&'static str, u32> = phf::phf_map! {
    "Iron Ball" => 130,
    "Hard Stone" => 100,
    "Rare Bone" => 100,
    "Deep Sea Tooth" => 90,
    "Thick Club" => 90,
    "Grip Claw" => 90,
    "Flame Plate" => 90,
    "Assault Vest" => 80,
    "Dawn Stone" => 80,
    "Quick Claw" => 80,
    "Protector" => 80,
    "Dragon Fang" => 70,
    "Poison Barb" => 70,
    "Power Bracer" => 70,
    "Adamant Orb" => 60,
    "Damp Rock" => 60,
    "Macho Brace" => 60,
    "Stick" => 60,
    "Dubious Disc" => 50,
    "Sharp Beak" => 50,
    "Eviolite" => 40,
    "Icy Rock" => 40,
    "Lucky Punch" => 40,
    "Black Belt" => 30,
    "King's Rock" => 30,
    "Light Ball" => 30,
    "Metal Coat" => 30,
    "Shell Bell" => 30,
    "Cheri Berry" => 10,
    "Oran Berry" => 10,
};

/// Natural Gift data for one berry.
///
/// `tier_power` is the Gen 4/5 value; Gen 6 adds 20 across the board.
/// Fairy-type berries only exist from Gen 6, tracked via `min_generation`.
#[derive(Debug, Clone)]
pub struct BerryData {
    pub type_: Type,
    pub tier_power: u32,
    pub min_generation: u8,
}

macro_rules! berry {
    ($type_:ident, $power:literal) => {
        BerryData { type_: Type::$type_, tier_power: $power, min_generation: 4 }
    };
    ($type_:ident, $power:literal, gen6) => {
        BerryData { type_: Type::$type_, tier_power: $power, min_generation: 6 }
    };
}

pub static NATURAL_GIFT_BERRIES: phf::Map<&'static str, BerryData> = phf::phf_map! {
    // Status-cure and early berries, lowest tier
    "Cheri Berry" => berry!(Fire, 60),
    "Chesto Berry" => berry!(Water, 60),
    "Pecha Berry" => berry!(Electric, 60),
    "Rawst Berry" => berry!(Grass, 60),
    "Aspear Berry" => berry!(Ice, 60),
    "Leppa Berry" => berry!(Fighting, 60),
    "Oran Berry" => berry!(Poison, 60),
    "Persim Berry" => berry!(Ground, 60),
    "Lum Berry" => berry!(Flying, 60),
    "Sitrus Berry" => berry!(Psychic, 60),
    "Figy Berry" => berry!(Bug, 60),
    "Wiki Berry" => berry!(Rock, 60),
    "Mago Berry" => berry!(Ghost, 60),
    "Aguav Berry" => berry!(Dragon, 60),
    "Iapapa Berry" => berry!(Dark, 60),
    "Razz Berry" => berry!(Steel, 60),

    // EV-lowering berries, middle tier
    "Pomeg Berry" => berry!(Ice, 70),
    "Kelpsy Berry" => berry!(Fighting, 70),
    "Qualot Berry" => berry!(Poison, 70),
    "Hondew Berry" => berry!(Ground, 70),
    "Grepa Berry" => berry!(Flying, 70),
    "Tamato Berry" => berry!(Psychic, 70),

    // Type-resist berries, middle tier
    "Occa Berry" => berry!(Fire, 70),
    "Passho Berry" => berry!(Water, 70),
    "Wacan Berry" => berry!(Electric, 70),
    "Rindo Berry" => berry!(Grass, 70),
    "Yache Berry" => berry!(Ice, 70),
    "Chople Berry" => berry!(Fighting, 70),
    "Kebia Berry" => berry!(Poison, 70),
    "Shuca Berry" => berry!(Ground, 70),
    "Coba Berry" => berry!(Flying, 70),
    "Payapa Berry" => berry!(Psychic, 70),
    "Tanga Berry" => berry!(Bug, 70),
    "Charti Berry" => berry!(Rock, 70),
    "Kasib Berry" => berry!(Ghost, 70),
    "Haban Berry" => berry!(Dragon, 70),
    "Colbur Berry" => berry!(Dark, 70),
    "Babiri Berry" => berry!(Steel, 70),
    "Chilan Berry" => berry!(Normal, 70),

    // Pinch and battle-reward berries, top tier
    "Liechi Berry" => berry!(Grass, 80),
    "Ganlon Berry" => berry!(Ice, 80),
    "Salac Berry" => berry!(Fighting, 80),
    "Petaya Berry" => berry!(Poison, 80),
    "Apicot Berry" => berry!(Ground, 80),
    "Lansat Berry" => berry!(Flying, 80),
    "Starf Berry" => berry!(Psychic, 80),
    "Enigma Berry" => berry!(Bug, 80),
    "Micle Berry" => berry!(Rock, 80),
    "Custap Berry" => berry!(Ghost, 80),
    "Jaboca Berry" => berry!(Dragon, 80),
    "Rowap Berry" => berry!(Dark, 80),

    // Fairy berries, introduced with the type itself
    "Roseli Berry" => berry!(Fairy, 60, gen6),
    "Kee Berry" => berry!(Fairy, 80, gen6),
    "Maranga Berry" => berry!(Fairy, 80, gen6),
};
