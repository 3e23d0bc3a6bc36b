use std::sync::LazyLock;

pub static MAX_LEVEL: u8 = 20;

/// Total experience required to reach each level; index 0 is level 1 (0 XP).
/// Strictly increasing by construction, which keeps the progress math below
/// free of zero denominators.
static EXPERIENCE_PER_LEVEL: LazyLock<Vec<u32>> = LazyLock::new(|| {
    vec![
        0,      // level 1
        300,    // level 2
        900,    // level 3
        2700,   // level 4
        6500,   // level 5
        14000,  // level 6
        23000,  // level 7
        34000,  // level 8
        48000,  // level 9
        64000,  // level 10
        85000,  // level 11
        100000, // level 12
        120000, // level 13
        140000, // level 14
        165000, // level 15
        195000, // level 16
        225000, // level 17
        265000, // level 18
        305000, // level 19
        355000, // level 20
    ]
});

/// The highest level whose threshold the experience total has reached.
/// Never below 1, capped at 20 no matter how much XP piles up.
pub fn level_from_xp(exp: u32) -> u8 {
    let mut level = 1;
    for (index, threshold) in EXPERIENCE_PER_LEVEL.iter().enumerate() {
        if exp >= *threshold {
            level = index as u8 + 1;
        }
    }
    level
}

/// `(level - 1) / 4 + 2`, the standard 5e progression: +2 at levels 1-4 up
/// to +6 at levels 17-20.
pub fn proficiency_bonus(level: u8) -> i32 {
    ((level.max(1) - 1) / 4 + 2) as i32
}

/// Snapshot of progress toward the next level, as rendered by the XP bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XpProgress {
    pub current_level_min_xp: u32,
    /// `None` once the character sits at the level cap.
    pub next_level_xp: Option<u32>,
    pub percent: f32,
}

pub fn xp_progress(exp: u32, level: u8) -> XpProgress {
    assert!(
        (1..=MAX_LEVEL).contains(&level),
        "level out of range: {}",
        level
    );
    let current_level_min_xp = EXPERIENCE_PER_LEVEL[(level - 1) as usize];
    let next_level_xp = if level < MAX_LEVEL {
        Some(EXPERIENCE_PER_LEVEL[level as usize])
    } else {
        None
    };
    let percent = match next_level_xp {
        Some(next) => {
            let needed = (next - current_level_min_xp) as f32;
            let earned = exp.saturating_sub(current_level_min_xp) as f32;
            (earned / needed * 100.0).clamp(0.0, 100.0)
        }
        None => 100.0,
    };
    XpProgress {
        current_level_min_xp,
        next_level_xp,
        percent,
    }
}
