//! Solution constructor: one ant.
//!
//! # Algorithm
//!
//! 1. Order activities by `pheromone^alpha * heuristic^beta`, descending.
//!    The ordering is private to this ant; shared tables are only read.
//! 2. For each activity, retry up to `max_attempts` rounds: shuffle the
//!    days, and for each (day, room, teacher) combination passing the time
//!    prefilter, compute the jointly free periods and look for a consecutive
//!    block of the required duration. The first block set found wins; one
//!    block is chosen at random and the periods are reserved for the
//!    teacher, the room, and every attending subgroup.
//! 3. An activity that survives all rounds unplaced is dropped from this
//!    candidate solution. No backtracking, no second pass.
//!
//! Within one constructed timetable the reservation sets make teacher, room,
//! and subgroup double-booking impossible; omission is the only failure mode.

use std::collections::{HashMap, HashSet};

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use super::blocks::consecutive_blocks;
use super::params::ColonyParams;
use super::tables::{HeuristicTable, PheromoneTable};
use crate::models::{Activity, Catalog, ConstraintRule, Day, Period, Room, ScheduleEntry, Timetable};

/// Per-ant reservation state: (resource, day) → occupied period indices.
///
/// Owned exclusively by one construction pass and dropped at its end.
#[derive(Default)]
struct Reservations {
    teacher: HashMap<(String, String), HashSet<usize>>,
    room: HashMap<(String, String), HashSet<usize>>,
    group: HashMap<(String, String), HashSet<usize>>,
}

impl Reservations {
    fn is_free(&self, activity: &Activity, teacher_id: &str, room_code: &str, day_id: &str, index: usize) -> bool {
        let occupied = |map: &HashMap<(String, String), HashSet<usize>>, id: &str| {
            map.get(&(id.to_string(), day_id.to_string()))
                .is_some_and(|set| set.contains(&index))
        };
        if occupied(&self.teacher, teacher_id) || occupied(&self.room, room_code) {
            return false;
        }
        !activity
            .subgroup_ids
            .iter()
            .any(|sg| occupied(&self.group, sg))
    }

    fn commit(&mut self, entry: &ScheduleEntry) {
        for p in &entry.periods {
            self.teacher
                .entry((entry.teacher_id.clone(), entry.day_id.clone()))
                .or_default()
                .insert(p.index);
            self.room
                .entry((entry.room_code.clone(), entry.day_id.clone()))
                .or_default()
                .insert(p.index);
            for sg in &entry.subgroup_ids {
                self.group
                    .entry((sg.clone(), entry.day_id.clone()))
                    .or_default()
                    .insert(p.index);
            }
        }
    }
}

/// Builds one candidate timetable from a read-only problem snapshot.
///
/// Holds references only; the caller supplies the random source per
/// construction, so one constructor can serve many ants.
pub struct SolutionConstructor<'a> {
    catalog: &'a Catalog,
    heuristic: &'a HeuristicTable,
    pheromone: &'a PheromoneTable,
    params: &'a ColonyParams,
    /// IDs of every non-interval period, for the day-level time prefilter.
    teachable_period_ids: Vec<String>,
}

impl<'a> SolutionConstructor<'a> {
    /// Creates a constructor over a validated catalog.
    pub fn new(
        catalog: &'a Catalog,
        heuristic: &'a HeuristicTable,
        pheromone: &'a PheromoneTable,
        params: &'a ColonyParams,
    ) -> Self {
        let teachable_period_ids = catalog
            .non_interval_periods()
            .iter()
            .map(|p| p.id.clone())
            .collect();
        Self {
            catalog,
            heuristic,
            pheromone,
            params,
            teachable_period_ids,
        }
    }

    /// Priority score for an activity under the current tables.
    fn priority(&self, activity: &Activity) -> f64 {
        self.pheromone.get(&activity.code).powf(self.params.alpha)
            * self.heuristic.get(&activity.code).powf(self.params.beta)
    }

    /// Activities in descending priority order. Ties break arbitrarily.
    fn ordered_activities(&self) -> Vec<&'a Activity> {
        let mut activities: Vec<&Activity> = self.catalog.list_activities().iter().collect();
        activities.sort_unstable_by(|a, b| self.priority(b).total_cmp(&self.priority(a)));
        activities
    }

    /// Whether any room time rule rules the room out for this day.
    ///
    /// Deliberately coarse: a rule forbidding any teachable period on the
    /// day blocks the room for the whole day.
    fn room_available(&self, room_code: &str, day_id: &str) -> bool {
        !self.catalog.list_constraints().iter().any(|c| match &c.rule {
            ConstraintRule::RoomTime {
                room_code: rc,
                day_id: rule_day,
                period_ids,
            } => {
                rc == room_code
                    && rule_day.as_deref().map_or(true, |d| d == day_id)
                    && self.teachable_period_ids.iter().any(|p| period_ids.contains(p))
            }
            _ => false,
        })
    }

    /// Whether any teacher time rule rules the teacher out for this day.
    fn teacher_available(&self, teacher_id: &str, day_id: &str) -> bool {
        !self.catalog.list_constraints().iter().any(|c| match &c.rule {
            ConstraintRule::TeacherTime {
                teacher_id: tid,
                day_id: rule_day,
                period_ids,
            } => {
                tid == teacher_id
                    && rule_day.as_deref().map_or(true, |d| d == day_id)
                    && self.teachable_period_ids.iter().any(|p| period_ids.contains(p))
            }
            _ => false,
        })
    }

    /// Periods jointly free for the teacher, the room, and every attending
    /// subgroup on a day. Interval periods never qualify.
    fn free_periods(
        &self,
        reservations: &Reservations,
        activity: &Activity,
        teacher_id: &str,
        room_code: &str,
        day_id: &str,
    ) -> Vec<Period> {
        self.catalog
            .non_interval_periods()
            .into_iter()
            .filter(|p| reservations.is_free(activity, teacher_id, room_code, day_id, p.index))
            .cloned()
            .collect()
    }

    /// Builds one complete (possibly partial) candidate timetable.
    pub fn construct<R: Rng>(&self, rng: &mut R) -> Timetable {
        let mut timetable = Timetable::new();
        let mut reservations = Reservations::default();

        for activity in self.ordered_activities() {
            let enrolled = self.catalog.enrolled_count(activity);

            let mut candidate_rooms: Vec<&Room> = self
                .catalog
                .list_rooms()
                .iter()
                .filter(|r| r.fits(enrolled))
                .collect();
            if candidate_rooms.is_empty() {
                continue;
            }

            let mut candidate_teachers = activity.teacher_ids.clone();
            if candidate_teachers.is_empty() {
                continue;
            }
            candidate_teachers.shuffle(rng);

            if let Some(entry) = self.try_place(
                activity,
                &mut candidate_rooms,
                &candidate_teachers,
                &reservations,
                rng,
            ) {
                reservations.commit(&entry);
                timetable.push(entry);
            }
            // else: silently omitted; downstream tolerates partial solutions
        }

        timetable
    }

    /// Runs the bounded retry loop for one activity. Returns the entry to
    /// commit, or `None` after `max_attempts` fruitless rounds.
    fn try_place<R: Rng>(
        &self,
        activity: &Activity,
        candidate_rooms: &mut Vec<&Room>,
        candidate_teachers: &[String],
        reservations: &Reservations,
        rng: &mut R,
    ) -> Option<ScheduleEntry> {
        let mut days: Vec<&Day> = self.catalog.list_days().iter().collect();

        for _ in 0..self.params.max_attempts {
            days.shuffle(rng);

            for day in &days {
                candidate_rooms.shuffle(rng);

                for room in candidate_rooms.iter() {
                    if !self.room_available(&room.code, &day.id) {
                        continue;
                    }

                    for teacher_id in candidate_teachers {
                        if !self.teacher_available(teacher_id, &day.id) {
                            continue;
                        }

                        let free = self.free_periods(
                            reservations,
                            activity,
                            teacher_id,
                            &room.code,
                            &day.id,
                        );
                        let blocks = consecutive_blocks(activity.duration, &free);
                        if let Some(block) = blocks.choose(rng) {
                            return Some(ScheduleEntry {
                                activity_code: activity.code.clone(),
                                subject: activity.subject.clone(),
                                day_id: day.id.clone(),
                                periods: block.clone(),
                                room_code: room.code.clone(),
                                teacher_id: teacher_id.clone(),
                                subgroup_ids: activity.subgroup_ids.clone(),
                            });
                        }
                    }
                }
            }
        }

        None
    }
}
