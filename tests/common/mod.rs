#![allow(unused)]

use catch_pp::{
    model::{control_point::TimingPoint, pos::Pos2},
    object::{CatchHitObject, JuiceStream, SliderPath},
    Beatmap,
};

pub use self::mods::*;

/// Bit values for mods
mod mods {
    pub const NM: u32 = 0;
    pub const NF: u32 = 1 << 0;
    pub const EZ: u32 = 1 << 1;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const DT: u32 = 1 << 6;
    pub const HT: u32 = 1 << 8;
    pub const FL: u32 = 1 << 10;
}

pub const N_FRUITS: u32 = 32;
pub const N_DROPLETS: u32 = 2;
pub const N_TINY_DROPLETS: u32 = 14;
pub const N_BANANAS: u32 = 17;

/// A small map containing every kind of object.
///
/// Beat length 800 with slider multiplier 2 results in a velocity of
/// 0.25px/ms and a tick distance of 200px.
pub fn test_map() -> Beatmap {
    let mut hit_objects = Vec::new();

    // Jumps across the playfield
    for i in 0..20 {
        let x = if i % 2 == 0 { 64.0 } else { 448.0 };
        hit_objects.push(CatchHitObject::fruit(x, 1000.0 + f64::from(i) * 300.0));
    }

    // One tick, seven tiny droplets, and the closing fruit
    let path = SliderPath::new(vec![Pos2::new(0.0, 0.0), Pos2::new(400.0, 0.0)], None);
    hit_objects.push(CatchHitObject::juice_stream(
        64.0,
        7000.0,
        JuiceStream::new(path, 0),
    ));

    // No ticks, a droplet at the repeat, seven tiny droplets, and the closing fruit
    let path = SliderPath::new(vec![Pos2::new(0.0, 0.0), Pos2::new(200.0, 0.0)], None);
    hit_objects.push(CatchHitObject::juice_stream(
        100.0,
        9000.0,
        JuiceStream::new(path, 1),
    ));

    hit_objects.push(CatchHitObject::banana_shower(11_000.0, 12_000.0));

    // A short stream of fruits
    for i in 0..10 {
        let x = 200.0 + 10.0 * i as f32;
        hit_objects.push(CatchHitObject::fruit(x, 12_500.0 + f64::from(i) * 250.0));
    }

    let mut map = Beatmap {
        ar: 9.0,
        cs: 4.0,
        slider_multiplier: 2.0,
        slider_tick_rate: 1.0,
        timing_points: vec![TimingPoint::new(0.0, 800.0)],
        hit_objects,
        ..Default::default()
    };

    map.apply_defaults();

    map
}

#[track_caller]
pub fn assert_eq_float(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}
