use catch_pp::{Beatmap, CatchDifficulty, CatchStrains, InvalidBeatmap};

use self::common::*;

mod common;

#[test]
fn empty_map() {
    let attrs = CatchDifficulty::new().calculate(&Beatmap::default());

    assert_eq_float(attrs.stars, 0.0);
    assert_eq!(attrs.max_combo(), 0);
    assert_eq!(attrs.n_tiny_droplets, 0);
    assert_eq_float(attrs.ar, 0.0);
}

#[test]
fn object_counts() {
    let map = test_map();
    let count = map.object_count();

    assert_eq!(count.fruits, N_FRUITS);
    assert_eq!(count.droplets, N_DROPLETS);
    assert_eq!(count.tiny_droplets, N_TINY_DROPLETS);
    assert_eq!(count.bananas, N_BANANAS);
    assert_eq!(map.max_combo(), N_FRUITS + N_DROPLETS);

    let attrs = CatchDifficulty::new().calculate(&map);

    assert_eq!(attrs.n_fruits, N_FRUITS);
    assert_eq!(attrs.n_droplets, N_DROPLETS);
    assert_eq!(attrs.n_tiny_droplets, N_TINY_DROPLETS);
    assert_eq!(attrs.max_combo(), N_FRUITS + N_DROPLETS);
}

#[test]
fn deterministic() {
    let map = test_map();

    for mods in [NM, HR, DT, EZ | HT] {
        let a = CatchDifficulty::new().mods(mods).calculate(&map);
        let b = CatchDifficulty::new().mods(mods).calculate(&map);

        assert_eq!(a.stars.to_bits(), b.stars.to_bits());
        assert_eq!(a, b);
    }
}

#[test]
fn mods_change_difficulty() {
    let map = test_map();
    let calc = |mods: u32| CatchDifficulty::new().mods(mods).calculate(&map);

    let nm = calc(NM);
    let dt = calc(DT);
    let ht = calc(HT);

    assert!(nm.stars > 0.0);
    assert!(dt.stars > nm.stars);
    assert!(ht.stars < nm.stars);

    // AR 9 => preempt 600ms
    assert_eq_float(nm.ar, 9.0);
    // 400ms => AR 10.33..
    assert_eq_float(dt.ar, 31.0 / 3.0);
    // 800ms => AR 7.66..
    assert_eq_float(ht.ar, 23.0 / 3.0);

    // AR 9 * 1.4 is capped at 10
    assert_eq_float(calc(HR).ar, 10.0);
    assert_eq_float(calc(EZ).ar, 4.5);

    // Hidden and flashlight don't affect difficulty
    assert_eq!(calc(HD | FL).stars.to_bits(), nm.stars.to_bits());
}

#[test]
fn mods_are_echoed() {
    let map = test_map();
    let attrs = CatchDifficulty::new().mods(HD | HR).calculate(&map);

    assert!(attrs.mods.hd());
    assert!(attrs.mods.hr());
    assert!(!attrs.mods.dt());
}

#[test]
fn calculate_all() {
    let map = test_map();
    let all = CatchDifficulty::new().calculate_all(&map);

    assert_eq!(all.len(), 9);

    for attrs in all.iter() {
        let expected = CatchDifficulty::new().mods(attrs.mods).calculate(&map);

        assert_eq!(attrs, &expected);
        assert_eq!(attrs.max_combo(), N_FRUITS + N_DROPLETS);
    }
}

#[test]
fn custom_values() {
    let map = test_map();

    let attrs = CatchDifficulty::new()
        .mods(HR)
        .ar(8.0, true)
        .cs(2.0, false)
        .calculate(&map);

    assert_eq_float(attrs.ar, 8.0);

    let larger_catcher = CatchDifficulty::new().cs(0.0, true).calculate(&map);
    let smaller_catcher = CatchDifficulty::new().cs(8.0, true).calculate(&map);

    assert!(smaller_catcher.stars > larger_catcher.stars);
}

#[test]
fn partial_play() {
    let map = test_map();

    let attrs = CatchDifficulty::new().passed_objects(20).calculate(&map);

    assert_eq!(attrs.n_fruits, 20);
    assert_eq!(attrs.n_droplets, 0);
    assert_eq!(attrs.n_tiny_droplets, 0);

    let full = CatchDifficulty::new().calculate(&map);
    assert!(attrs.stars <= full.stars);
}

#[test]
fn strains() {
    let map = test_map();
    let strains = CatchDifficulty::new().strains(&map);

    // The first movement ends at 1300ms, the last at 14750ms so sections
    // end at 1500ms, 2250ms, ..., 15000ms
    let expected_sections = (15_000.0 - 1500.0) / CatchStrains::SECTION_LEN + 1.0;

    assert_eq!(strains.movement.len(), expected_sections as usize);
    assert!(strains.movement.iter().any(|&peak| peak > 0.0));
}

#[test]
fn extreme_circle_size() {
    let map = test_map();

    for cs in [-20.0, 5.0 + 5.0 / 0.7, 12.142_857, 20.0] {
        let attrs = CatchDifficulty::new().cs(cs, false).calculate(&map);

        assert!(attrs.stars.is_finite(), "CS {cs}: {}", attrs.stars);
    }
}

#[test]
fn validity() {
    let mut map = test_map();
    assert_eq!(map.check_validity(), Ok(()));

    map.hit_objects.swap(0, 1);
    assert_eq!(
        map.check_validity(),
        Err(InvalidBeatmap::UnsortedObjects { idx: 1 })
    );

    let mut map = test_map();
    map.slider_multiplier = f64::NAN;
    assert!(matches!(
        map.check_validity(),
        Err(InvalidBeatmap::NonFiniteValue { .. })
    ));
}
