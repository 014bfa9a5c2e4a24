use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::profile::Profile;

pub const AGE_BOUNDS: RangeInclusive<u8> = 18..=60;
pub const DISTANCE_BOUNDS: RangeInclusive<u32> = 1..=100;

/// Two-thumb age range. Both thumbs stay inside [`AGE_BOUNDS`] and never cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    min: u8,
    max: u8,
}

impl AgeRange {
    pub fn new(min: u8, max: u8) -> Self {
        let mut range = Self {
            min: *AGE_BOUNDS.start(),
            max: *AGE_BOUNDS.end(),
        };
        range.set_max(max);
        range.set_min(min);
        range
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn set_min(&mut self, min: u8) {
        self.min = min.clamp(*AGE_BOUNDS.start(), self.max);
    }

    pub fn set_max(&mut self, max: u8) {
        self.max = max.clamp(self.min, *AGE_BOUNDS.end());
    }

    pub fn contains(&self, age: u8) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 18, max: 35 }
    }
}

/// Constraints meant to narrow the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSettings {
    pub age_range: AgeRange,
    max_distance_km: u32,
    pub verified_only: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            age_range: AgeRange::default(),
            max_distance_km: 10,
            verified_only: false,
        }
    }
}

impl FilterSettings {
    pub fn new(age_range: AgeRange, max_distance_km: u32, verified_only: bool) -> Self {
        let mut settings = Self {
            age_range,
            max_distance_km: *DISTANCE_BOUNDS.start(),
            verified_only,
        };
        settings.set_max_distance(max_distance_km);
        settings
    }

    pub fn max_distance_km(&self) -> u32 {
        self.max_distance_km
    }

    pub fn set_max_distance(&mut self, km: u32) {
        self.max_distance_km = km.clamp(*DISTANCE_BOUNDS.start(), *DISTANCE_BOUNDS.end());
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        self.age_range.contains(profile.age)
            && profile.distance_km <= self.max_distance_km
            && (!self.verified_only || profile.verified)
    }
}
