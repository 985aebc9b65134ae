use std::slice::Iter;

use crate::{
    catcher::Catcher,
    model::beatmap::{Beatmap, ObjectCount},
    object::{CatchHitObject, CatchObjectKind, PalpableObject},
};

use super::object::CatchDifficultyObject;

/// All objects of a map in the order in which they have to be caught.
///
/// Juice streams are replaced by their nested objects, banana showers stay as
/// they are.
pub struct CatchObjects {
    pub objects: Vec<CatchHitObject>,
    pub count: ObjectCount,
}

impl CatchObjects {
    /// Flatten and sort the map's objects and initialize hyper dashes.
    ///
    /// If `passed_objects` is specified, objects after that many fruits and
    /// droplets are discarded.
    pub fn new(map: &Beatmap, cs: f32, passed_objects: Option<u32>) -> Self {
        let mut objects = Vec::with_capacity(map.hit_objects.len());

        for h in &map.hit_objects {
            match h.kind {
                CatchObjectKind::JuiceStream(_) => objects.extend(h.nested_objects()),
                _ => objects.push(h.clone()),
            }
        }

        // * In 2B beatmaps, it is possible that a normal Fruit is placed in the middle of a JuiceStream.
        objects.sort_by(|a, b| a.start_time().total_cmp(&b.start_time()));

        if let Some(passed_objects) = passed_objects {
            let len = passed_len(&objects, passed_objects);
            objects.truncate(len);
        }

        let mut count = ObjectCount::default();
        objects.iter().for_each(|h| count.record(h));

        initialize_hyper_dash(Catcher::hyper_dash_half_width(cs), &mut objects);

        Self { objects, count }
    }
}

fn passed_len(objects: &[CatchHitObject], passed_objects: u32) -> usize {
    let Some(nth) = (passed_objects as usize).checked_sub(1) else {
        return 0;
    };

    objects
        .iter()
        .enumerate()
        .filter(|(_, h)| h.is_combo_relevant())
        .nth(nth)
        .map_or(objects.len(), |(i, _)| i + 1)
}

fn initialize_hyper_dash(half_catcher_width: f64, objects: &mut [CatchHitObject]) {
    let mut palpable_objects: Vec<&mut PalpableObject> = objects
        .iter_mut()
        .filter(|h| h.is_combo_relevant())
        .map(|h| &mut h.base)
        .collect();

    let mut last_dir = 0;
    let mut last_excess = half_catcher_width;

    for i in 0..palpable_objects.len().saturating_sub(1) {
        let (next_x, next_time) = (palpable_objects[i + 1].x, palpable_objects[i + 1].start_time);
        let curr = &mut palpable_objects[i];

        let this_dir = if next_x > curr.x { 1 } else { -1 };

        // * Int truncation added to match osu!stable.
        let time_to_next =
            f64::from((next_time as i32 - curr.start_time as i32) as f32 - 1000.0 / 60.0 / 4.0);

        let dist_to_next = f64::from((next_x - curr.x).abs())
            - if last_dir == this_dir {
                last_excess
            } else {
                half_catcher_width
            };

        let dist_to_hyper = (time_to_next * Catcher::BASE_SPEED - dist_to_next) as f32;

        if dist_to_hyper < 0.0 {
            curr.hyper_dash = true;
            last_excess = half_catcher_width;
        } else {
            curr.dist_to_hyper_dash = dist_to_hyper;
            last_excess = f64::from(dist_to_hyper).clamp(0.0, half_catcher_width);
        }

        last_dir = this_dir;
    }
}

/// Lazily turns [`CatchObjects`] into [`CatchDifficultyObject`]s.
///
/// Only fruits and droplets are considered; tiny droplets and bananas are
/// skipped without breaking the pairing of their surrounding objects.
pub struct DifficultyObjects<'a> {
    objects: Iter<'a, CatchHitObject>,
    last: Option<&'a PalpableObject>,
    clock_rate: f64,
    scaling_factor: f32,
    idx: usize,
}

impl<'a> DifficultyObjects<'a> {
    pub fn new(objects: &'a [CatchHitObject], half_catcher_width: f32, clock_rate: f64) -> Self {
        Self {
            objects: objects.iter(),
            last: None,
            clock_rate,
            scaling_factor: CatchDifficultyObject::NORMALIZED_HITOBJECT_RADIUS
                / half_catcher_width,
            idx: 0,
        }
    }
}

impl Iterator for DifficultyObjects<'_> {
    type Item = CatchDifficultyObject;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let h = self.objects.next()?;

            // * We want to only consider fruits that contribute to the combo.
            if !h.is_combo_relevant() {
                continue;
            }

            let Some(last) = self.last.replace(&h.base) else {
                continue;
            };

            let diff_object = CatchDifficultyObject::new(
                &h.base,
                last,
                self.clock_rate,
                self.scaling_factor,
                self.idx,
            );

            self.idx += 1;

            return Some(diff_object);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.objects.len()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::pos::Pos2,
        object::{JuiceStream, SliderPath},
    };

    use super::*;

    fn map(hit_objects: Vec<CatchHitObject>) -> Beatmap {
        let mut map = Beatmap {
            hit_objects,
            ..Default::default()
        };

        map.apply_defaults();

        map
    }

    #[test]
    fn flattens_and_sorts() {
        let path = SliderPath::new(vec![Pos2::default(), Pos2::new(140.0, 0.0)], None);

        let map = map(vec![
            CatchHitObject::juice_stream(100.0, 0.0, JuiceStream::new(path, 1)),
            CatchHitObject::fruit(50.0, 500.0),
            CatchHitObject::banana_shower(3000.0, 3500.0),
        ]);

        let CatchObjects { objects, count } = CatchObjects::new(&map, 5.0, None);

        assert!(objects
            .windows(2)
            .all(|w| w[0].start_time() <= w[1].start_time()));

        assert!(objects
            .iter()
            .any(|h| matches!(h.kind, CatchObjectKind::BananaShower(_))));

        assert!(objects
            .iter()
            .all(|h| !matches!(h.kind, CatchObjectKind::JuiceStream(_))));

        assert_eq!(count.max_combo(), map.max_combo());
    }

    #[test]
    fn pairs_skip_tiny_droplets() {
        let map = map(vec![
            CatchHitObject::fruit(0.0, 0.0),
            CatchHitObject::tiny_droplet(100.0, 50.0),
            CatchHitObject::banana_shower(60.0, 80.0),
            CatchHitObject::droplet(200.0, 100.0),
            CatchHitObject::fruit(300.0, 200.0),
        ]);

        let CatchObjects { objects, .. } = CatchObjects::new(&map, 5.0, None);
        let diff_objects: Vec<_> = DifficultyObjects::new(&objects, 41.0, 1.0).collect();

        assert_eq!(diff_objects.len(), 2);
        assert!((diff_objects[0].delta_time - 100.0).abs() < f64::EPSILON);
        assert!((diff_objects[0].movement() - 200.0).abs() < f32::EPSILON);
        assert_eq!(diff_objects[1].idx, 1);
    }

    #[test]
    fn passed_objects() {
        let map = map(vec![
            CatchHitObject::fruit(0.0, 0.0),
            CatchHitObject::tiny_droplet(100.0, 50.0),
            CatchHitObject::fruit(200.0, 100.0),
            CatchHitObject::tiny_droplet(100.0, 150.0),
            CatchHitObject::fruit(300.0, 200.0),
        ]);

        let CatchObjects { objects, count } = CatchObjects::new(&map, 5.0, Some(2));

        assert_eq!(objects.len(), 3);
        assert_eq!(count.fruits, 2);
        assert_eq!(count.tiny_droplets, 1);

        assert!(CatchObjects::new(&map, 5.0, Some(0)).objects.is_empty());
        assert_eq!(CatchObjects::new(&map, 5.0, Some(10)).objects.len(), 5);
    }

    #[test]
    fn hyper_dash() {
        let map = map(vec![
            CatchHitObject::fruit(0.0, 0.0),
            CatchHitObject::fruit(512.0, 100.0),
            CatchHitObject::fruit(512.0, 2000.0),
        ]);

        let CatchObjects { objects, .. } = CatchObjects::new(&map, 5.0, None);

        assert!(objects[0].base.hyper_dash);
        assert!(!objects[1].base.hyper_dash);
        assert!(objects[1].base.dist_to_hyper_dash > 0.0);

        // The map itself is left untouched
        assert!(!map.hit_objects[0].base.hyper_dash);
    }
}
