use crate::model::hit_sample::HitSample;

use super::{CatchHitObject, CatchObjectKind, PalpableObject, SliderPath};

/// A juice stream i.e. a slider in osu!catch.
#[derive(Clone, Debug, PartialEq)]
pub struct JuiceStream {
    pub path: SliderPath,
    /// Amount of times the path is traversed backwards.
    pub repeats: usize,
    /// Distance travelled per millisecond.
    pub velocity: f64,
    /// Distance between two droplets.
    pub tick_distance: f64,
    /// Samples for each node, starting with the stream's head.
    pub node_samples: Vec<Vec<HitSample>>,
    /// If specified, the last object is moved this many milliseconds earlier.
    pub legacy_last_tick_offset: Option<f64>,
}

impl JuiceStream {
    pub const BASE_SCORING_DIST: f64 = 100.0;

    const MAX_LENGTH: f64 = 100_000.0;
    const MIN_TICK_MS_FROM_END: f64 = 10.0;
    const TINY_DROPLET_THRESHOLD: f64 = 80.0;
    const MAX_TINY_DROPLET_INTERVAL: f64 = 100.0;

    pub const fn new(path: SliderPath, repeats: usize) -> Self {
        Self {
            path,
            repeats,
            velocity: 1.0,
            tick_distance: Self::BASE_SCORING_DIST,
            node_samples: Vec::new(),
            legacy_last_tick_offset: None,
        }
    }

    pub const fn span_count(&self) -> usize {
        self.repeats + 1
    }

    pub fn distance(&self) -> f64 {
        self.path.dist()
    }

    pub fn duration(&self) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            self.span_count() as f64 * self.distance() / self.velocity
        }
    }

    /// Adjust the velocity so that the stream lasts `duration` milliseconds.
    pub fn set_duration(&mut self, duration: f64) {
        self.velocity = self.span_count() as f64 * self.distance() / duration;
    }

    pub fn span_duration(&self) -> f64 {
        self.duration() / self.span_count() as f64
    }

    /// Horizontal position at the end of the stream.
    pub fn end_x(&self, x: f32) -> f32 {
        let progress = if self.span_count() % 2 == 0 { 0.0 } else { 1.0 };

        x + self.path.position_at(progress).x
    }

    pub(crate) fn apply_defaults(
        &mut self,
        beat_len: f64,
        slider_velocity: f64,
        slider_multiplier: f64,
        slider_tick_rate: f64,
    ) {
        let scoring_dist = Self::BASE_SCORING_DIST * slider_multiplier * slider_velocity;

        self.tick_distance = scoring_dist / slider_tick_rate;
        self.velocity = scoring_dist / beat_len;
    }

    fn is_degenerate(&self) -> bool {
        let dist = self.distance();

        !(dist > 0.0 && dist.is_finite() && self.velocity > 0.0 && self.velocity.is_finite())
    }

    fn node_samples(&self, node: usize, base: &PalpableObject) -> Vec<HitSample> {
        self.node_samples
            .get(node + 1)
            .unwrap_or(&base.samples)
            .clone()
    }

    /// Ticks and span ends along the stream, sorted by time.
    fn events(&self, start_time: f64) -> Vec<StreamEvent> {
        let length = self.distance().min(Self::MAX_LENGTH);
        let span_count = self.span_count();
        let span_duration = self.distance() / self.velocity;
        let tick_dist = self.tick_distance.clamp(0.0, length);
        let min_dist_from_end = self.velocity * Self::MIN_TICK_MS_FROM_END;

        let mut tick_dists = Vec::new();

        if tick_dist > 0.0 {
            let mut d = tick_dist;

            while d <= length {
                if d >= length - min_dist_from_end {
                    break;
                }

                tick_dists.push(d);
                d += tick_dist;
            }
        }

        let mut events = Vec::with_capacity((tick_dists.len() + 1) * span_count);

        for span in 0..span_count {
            let span_start = start_time + span as f64 * span_duration;
            let reversed = span % 2 == 1;

            let tick = |&d: &f64| {
                // Ticks of reversed spans keep their position on the path
                let path_progress = d / length;
                let time_progress = if reversed {
                    1.0 - path_progress
                } else {
                    path_progress
                };

                StreamEvent {
                    time: span_start + time_progress * span_duration,
                    path_progress,
                    kind: StreamEventKind::Tick,
                }
            };

            if reversed {
                events.extend(tick_dists.iter().rev().map(tick));
            } else {
                events.extend(tick_dists.iter().map(tick));
            }

            events.push(StreamEvent {
                time: span_start + span_duration,
                path_progress: if reversed { 0.0 } else { 1.0 },
                kind: StreamEventKind::Node(span),
            });
        }

        if let Some(offset) = self.legacy_last_tick_offset {
            let last_span_start = start_time + (span_count - 1) as f64 * span_duration;
            let prev_time = events
                .len()
                .checked_sub(2)
                .map_or(start_time, |i| events[i].time);

            if let Some(last) = events.last_mut() {
                last.time = (last.time - offset)
                    .max(last_span_start + span_duration / 2.0)
                    .max(prev_time);
            }
        }

        events
    }

    pub(super) fn nested_objects(&self, base: &PalpableObject) -> Vec<CatchHitObject> {
        if self.is_degenerate() {
            let fruit = base.derive(base.x, base.start_time, self.node_samples(0, base));

            return vec![CatchHitObject::new(fruit, CatchObjectKind::Fruit)];
        }

        let events = self.events(base.start_time);

        let tick_samples: Vec<_> = base
            .samples
            .iter()
            .map(|sample| HitSample {
                name: HitSample::SLIDER_TICK.to_owned(),
                ..sample.clone()
            })
            .collect();

        let pickup = |time: f64, path_progress: f64, samples: Vec<HitSample>| {
            let x = base.x + self.path.position_at(path_progress).x;

            base.derive(x, time, samples)
        };

        let mut nested = Vec::with_capacity(events.len());
        let mut last_event: Option<&StreamEvent> = None;
        let last_idx = events.len() - 1;

        for (i, event) in events.iter().enumerate() {
            if let Some(last) = last_event.filter(|_| self.tick_distance > 0.0) {
                let since_last_tick = event.time - last.time;

                if since_last_tick > Self::TINY_DROPLET_THRESHOLD {
                    let mut time_between_tiny = since_last_tick;

                    while time_between_tiny > Self::MAX_TINY_DROPLET_INTERVAL {
                        time_between_tiny /= 2.0;
                    }

                    let mut t = time_between_tiny;

                    while t < since_last_tick {
                        let progress = last.path_progress
                            + (event.path_progress - last.path_progress) * (t / since_last_tick);

                        let tiny = pickup(last.time + t, progress, tick_samples.clone());
                        nested.push(CatchHitObject::new(tiny, CatchObjectKind::TinyDroplet));

                        t += time_between_tiny;
                    }
                }
            }

            let (kind, samples) = match event.kind {
                StreamEventKind::Node(span) if i == last_idx => {
                    (CatchObjectKind::Fruit, self.node_samples(span, base))
                }
                StreamEventKind::Node(span) => {
                    (CatchObjectKind::Droplet, self.node_samples(span, base))
                }
                StreamEventKind::Tick => (CatchObjectKind::Droplet, tick_samples.clone()),
            };

            let object = pickup(event.time, event.path_progress, samples);
            nested.push(CatchHitObject::new(object, kind));

            last_event = Some(event);
        }

        nested
    }
}

#[derive(Copy, Clone, Debug)]
struct StreamEvent {
    time: f64,
    path_progress: f64,
    kind: StreamEventKind,
}

#[derive(Copy, Clone, Debug)]
enum StreamEventKind {
    Tick,
    Node(usize),
}

#[cfg(test)]
mod tests {
    use crate::model::pos::Pos2;

    use super::*;

    fn stream(dist: f32, repeats: usize, velocity: f64, tick_distance: f64) -> CatchHitObject {
        let path = SliderPath::new(vec![Pos2::default(), Pos2::new(dist, 0.0)], None);

        let stream = JuiceStream {
            velocity,
            tick_distance,
            ..JuiceStream::new(path, repeats)
        };

        CatchHitObject::juice_stream(100.0, 1000.0, stream)
    }

    fn kinds(nested: &[CatchHitObject]) -> Vec<&'static str> {
        nested
            .iter()
            .map(|h| match h.kind {
                CatchObjectKind::Fruit => "fruit",
                CatchObjectKind::Droplet => "droplet",
                CatchObjectKind::TinyDroplet => "tiny",
                _ => "other",
            })
            .collect()
    }

    #[test]
    fn single_terminal_fruit() {
        let nested = stream(100.0, 0, 1.0, 100.0).nested_objects();

        assert_eq!(nested.len(), 1);
        assert!(matches!(nested[0].kind, CatchObjectKind::Fruit));
        assert!((nested[0].start_time() - 1100.0).abs() < f64::EPSILON);
        assert!((nested[0].x() - 200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn ticks_and_tiny_droplets() {
        // 600ms long with a tick every 200ms
        let nested = stream(600.0, 0, 1.0, 200.0).nested_objects();

        assert_eq!(kinds(&nested), ["droplet", "tiny", "droplet", "tiny", "fruit"]);

        let times: Vec<_> = nested.iter().map(CatchHitObject::start_time).collect();
        let expected = [1200.0, 1300.0, 1400.0, 1500.0, 1600.0];

        for (time, expected) in times.iter().zip(expected) {
            assert!((time - expected).abs() < 1e-9, "{time} != {expected}");
        }

        assert!((nested[1].x() - 400.0).abs() < 1e-3);
    }

    #[test]
    fn no_tiny_droplets_for_short_gaps() {
        let nested = stream(400.0, 0, 1.0, 100.0).nested_objects();

        assert_eq!(kinds(&nested), ["droplet", "droplet", "droplet", "fruit"]);
    }

    #[test]
    fn repeats_ping_pong() {
        let nested = stream(200.0, 2, 1.0, 100.0).nested_objects();

        let non_tiny: Vec<_> = nested
            .iter()
            .filter(|h| !matches!(h.kind, CatchObjectKind::TinyDroplet))
            .collect();

        let xs: Vec<_> = non_tiny.iter().map(|h| h.x()).collect();
        assert_eq!(xs, [200.0, 300.0, 200.0, 100.0, 200.0, 300.0]);

        assert!(matches!(non_tiny[1].kind, CatchObjectKind::Droplet));
        assert!(matches!(non_tiny[3].kind, CatchObjectKind::Droplet));
        assert!(matches!(non_tiny[5].kind, CatchObjectKind::Fruit));
        assert!((non_tiny[5].start_time() - 1600.0).abs() < 1e-9);

        assert!(nested
            .windows(2)
            .all(|w| w[0].start_time() <= w[1].start_time()));
    }

    #[test]
    fn no_tiny_droplets_without_ticks() {
        let nested = stream(300.0, 1, 1.0, 0.0).nested_objects();

        assert_eq!(kinds(&nested), ["droplet", "fruit"]);
    }

    #[test]
    fn ticks_near_end_are_dropped() {
        // Tick at 95 would be 5ms away from the end
        let nested = stream(100.0, 0, 1.0, 95.0).nested_objects();

        assert_eq!(kinds(&nested)[nested.len() - 1], "fruit");
        assert!(nested
            .iter()
            .all(|h| !matches!(h.kind, CatchObjectKind::Droplet)));
    }

    #[test]
    fn degenerate_streams() {
        for object in [stream(0.0, 0, 1.0, 100.0), stream(100.0, 3, 0.0, 100.0)] {
            let nested = object.nested_objects();

            assert_eq!(nested.len(), 1);
            assert!(matches!(nested[0].kind, CatchObjectKind::Fruit));
            assert!((nested[0].start_time() - 1000.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn legacy_last_tick_offset() {
        let mut object = stream(400.0, 0, 1.0, 100.0);

        if let CatchObjectKind::JuiceStream(ref mut stream) = object.kind {
            stream.legacy_last_tick_offset = Some(36.0);
        }

        let nested = object.nested_objects();
        let last = &nested[nested.len() - 1];

        assert!(matches!(last.kind, CatchObjectKind::Fruit));
        assert!((last.start_time() - 1364.0).abs() < 1e-9);
    }

    #[test]
    fn duration_inverse() {
        let path = SliderPath::new(vec![Pos2::default(), Pos2::new(150.0, 0.0)], None);
        let mut stream = JuiceStream::new(path, 2);
        stream.set_duration(900.0);

        assert!((stream.velocity - 0.5).abs() < 1e-12);
        assert!((stream.velocity * stream.span_duration() - stream.distance()).abs() < 1e-9);
        assert!((stream.end_x(10.0) - 160.0).abs() < f32::EPSILON);
    }

    #[test]
    fn node_samples() {
        let mut object = stream(100.0, 1, 1.0, 0.0);
        let head = vec![HitSample::new(HitSample::HIT_NORMAL, "soft")];
        let repeat = vec![HitSample::new(HitSample::HIT_CLAP, "soft")];

        object.base.samples = vec![HitSample::new(HitSample::HIT_WHISTLE, "drum")];

        if let CatchObjectKind::JuiceStream(ref mut stream) = object.kind {
            stream.node_samples = vec![head, repeat.clone()];
        }

        let nested = object.nested_objects();

        assert_eq!(nested[0].base.samples, repeat);
        assert_eq!(nested[1].base.samples, object.base.samples);
    }
}
