//! The allocation engine.
//!
//! Orchestrates the seat index, section registry, RAC queues, waiting list
//! and booking ledger to implement booking, cancellation with its promotion
//! cascade, display rotation and the admin report.
//!
//! Every operation validates before it mutates, so a rejected call leaves
//! the engine unchanged.

use tracing::{debug, info, warn};

use railseat_core::config::EngineConfig;
use railseat_core::error::AppError;
use railseat_core::events::{AllocationEvent, JournalEntry};
use railseat_core::result::AppResult;
use railseat_core::types::{
    AdminReport, BookingOutcome, CancellationReport, Direction, Gender, Passenger, Promotion,
    RequestType, SeatNumber, SeatView, Section,
};

use crate::journal::AllocationJournal;
use crate::ledger::BookingLedger;
use crate::rotation::RotationSequence;
use crate::seat::{SeatId, SeatIndex};
use crate::section::SectionRegistry;
use crate::waitlist::WaitingList;

/// Single-caller allocation engine holding all booking state.
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    seats: SeatIndex,
    sections: SectionRegistry,
    ledger: BookingLedger,
    waiting: WaitingList,
    rotation: RotationSequence,
    journal: AllocationJournal,
    rac_capacity: usize,
    strict_gender: bool,
}

impl AllocationEngine {
    /// Creates an engine with no seats.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            seats: SeatIndex::new(),
            sections: SectionRegistry::new(),
            ledger: BookingLedger::new(),
            waiting: WaitingList::new(),
            rotation: RotationSequence::new(),
            journal: AllocationJournal::new(config.journal_capacity),
            rac_capacity: config.rac_capacity.max(1),
            strict_gender: config.strict_gender,
        }
    }

    /// Creates an engine and adds the configured seat layout in order.
    pub fn from_config(config: &EngineConfig) -> AppResult<Self> {
        let mut engine = Self::new(config);
        for spec in &config.seats {
            engine.add_seat(spec.number, spec.section)?;
        }
        info!(seats = engine.seats.len(), "Seat layout loaded");
        Ok(engine)
    }

    /// Adds an unbooked seat.
    pub fn add_seat(&mut self, number: SeatNumber, section: Section) -> AppResult<SeatId> {
        let id = self
            .seats
            .insert(number, section, self.rac_capacity)
            .inspect_err(|_| warn!(seat = %number, "Duplicate seat rejected"))?;

        self.sections.register(section, id);
        self.rotation.push(number);
        self.journal.record(AllocationEvent::SeatAdded {
            seat_number: number,
            section,
        });
        debug!(seat = %number, section = %section, "Seat added");

        Ok(id)
    }

    /// Books a request: a free seat, else a RAC slot, else the waiting list.
    ///
    /// Only fails when strict gender validation rejects the input, in which
    /// case nothing (not even the section cursor) changes.
    pub fn book(
        &mut self,
        name: impl Into<String>,
        gender: &str,
        request_type: RequestType,
    ) -> AppResult<BookingOutcome> {
        let gender = if self.strict_gender {
            Gender::parse_strict(gender)
                .inspect_err(|_| warn!(gender = %gender, "Gender rejected"))?
        } else {
            Gender::normalize(gender)
        };
        let passenger = Passenger::new(name, gender);
        let name = passenger.name.clone();

        if let Some(id) = self.find_free_seat() {
            let seat = self.seat_mut(id)?;
            let (seat_number, section) = (seat.number(), seat.section());
            seat.set_occupant(passenger);
            self.ledger.push(id);

            info!(name = %name, seat = %seat_number, section = %section, "Seat booked");
            self.journal.record(AllocationEvent::Seated {
                name,
                seat_number,
                section,
            });
            return Ok(BookingOutcome::Seated {
                seat_number,
                section,
            });
        }

        if let Some(id) = self.find_rac_seat(&passenger.gender) {
            let seat = self.seat_mut(id)?;
            let seat_number = seat.number();
            seat.rac_mut().try_push(passenger).map_err(|p| {
                AppError::internal(format!(
                    "RAC queue of seat {seat_number} refused {} after accepting",
                    p.name
                ))
            })?;

            info!(name = %name, seat = %seat_number, "RAC assigned");
            self.journal
                .record(AllocationEvent::RacAssigned { name, seat_number });
            return Ok(BookingOutcome::Rac { seat_number });
        }

        let position = self.waiting.enqueue(passenger, request_type);
        info!(
            name = %name,
            request_type = %request_type,
            position = position,
            waiting = self.waiting.len(),
            "Waitlisted"
        );
        self.journal.record(AllocationEvent::Waitlisted {
            name,
            tatkal: request_type == RequestType::Tatkal,
        });

        Ok(BookingOutcome::Waitlisted { position })
    }

    /// Cancels the most recently confirmed booking and promotes a successor.
    ///
    /// The cancelled seat's own RAC head wins over the waiting list head; with
    /// neither, the seat becomes free and leaves the ledger.
    pub fn cancel(&mut self) -> AppResult<CancellationReport> {
        let Some(id) = self.ledger.last() else {
            warn!("Cancellation requested with an empty ledger");
            return Err(AppError::empty_ledger());
        };

        let seat = self
            .seats
            .get_mut(id)
            .ok_or_else(|| AppError::internal(format!("Ledger references unknown seat {id}")))?;
        let (seat_number, section) = (seat.number(), seat.section());
        let cancelled = seat.take_occupant().ok_or_else(|| {
            AppError::internal(format!("Ledger references unbooked seat {seat_number}"))
        })?;
        self.ledger.pop();

        info!(name = %cancelled.name, seat = %seat_number, "Booking cancelled");
        self.journal.record(AllocationEvent::Cancelled {
            name: cancelled.name.clone(),
            seat_number,
        });

        let promotion = if let Some(next) = seat.rac_mut().pop() {
            seat.set_occupant(next.clone());
            Promotion::Rac(next)
        } else if let Some(next) = self.waiting.dequeue() {
            seat.set_occupant(next.clone());
            Promotion::Waitlist(next)
        } else {
            Promotion::SeatFreed
        };

        // A promoted passenger makes the seat the newest booking again.
        if promotion.passenger().is_some() {
            self.ledger.push(id);
        }

        match &promotion {
            Promotion::Rac(p) => {
                info!(name = %p.name, seat = %seat_number, "RAC holder promoted");
                self.journal.record(AllocationEvent::RacPromoted {
                    name: p.name.clone(),
                    seat_number,
                });
            }
            Promotion::Waitlist(p) => {
                info!(
                    name = %p.name,
                    seat = %seat_number,
                    waiting = self.waiting.len(),
                    "Waitlist head promoted"
                );
                self.journal.record(AllocationEvent::WaitlistPromoted {
                    name: p.name.clone(),
                    seat_number,
                });
            }
            Promotion::SeatFreed => {
                info!(seat = %seat_number, "Seat now available");
                self.journal
                    .record(AllocationEvent::SeatFreed { seat_number });
            }
        }

        Ok(CancellationReport {
            cancelled,
            seat_number,
            section,
            promotion,
        })
    }

    /// Rotates the seat display order by one step and returns it.
    pub fn rotate(&mut self, direction: Direction) -> Vec<SeatNumber> {
        let order = self.rotation.rotate(direction);
        debug!(direction = %direction, "Seat order rotated");
        self.journal.record(AllocationEvent::Rotated { direction });
        order
    }

    /// Seat numbers in ascending and level order, plus the waiting names.
    pub fn admin_report(&self) -> AdminReport {
        AdminReport {
            in_order: self.seats.in_order().collect(),
            level_order: self.seats.level_order().collect(),
            waiting_names: self.waiting.names(),
        }
    }

    /// Snapshot of every seat in creation order.
    pub fn seat_map(&self) -> Vec<SeatView> {
        self.seats.seats().map(|(_, seat)| seat.view()).collect()
    }

    /// Snapshot of one seat.
    pub fn seat(&self, number: SeatNumber) -> Option<SeatView> {
        self.seats
            .find(number)
            .and_then(|id| self.seats.get(id))
            .map(|seat| seat.view())
    }

    /// Journal entries, oldest first.
    pub fn history(&self) -> Vec<JournalEntry> {
        self.journal.entries().cloned().collect()
    }

    /// Current seat display order.
    pub fn rotation_order(&self) -> Vec<SeatNumber> {
        self.rotation.to_vec()
    }

    /// Section the next booking will try first.
    pub fn section_cursor(&self) -> Section {
        self.sections.cursor()
    }

    /// Total number of section attempts made by bookings so far.
    pub fn section_attempts(&self) -> u64 {
        self.sections.attempts()
    }

    /// Seat numbers in the booking ledger, oldest first.
    pub fn ledger(&self) -> Vec<SeatNumber> {
        self.ledger
            .iter()
            .filter_map(|id| self.seats.get(id).map(|s| s.number()))
            .collect()
    }

    /// Number of passengers on the waiting list.
    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    /// Number of seats.
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Read access to the seat index.
    pub fn seats(&self) -> &SeatIndex {
        &self.seats
    }

    fn seat_mut(&mut self, id: SeatId) -> AppResult<&mut crate::seat::Seat> {
        self.seats
            .get_mut(id)
            .ok_or_else(|| AppError::internal(format!("Unknown seat {id}")))
    }

    /// Tries each section once from the cursor, advancing the cursor per attempt.
    fn find_free_seat(&mut self) -> Option<SeatId> {
        for _ in 0..self.sections.section_count() {
            let section = self.sections.next_section();
            let free = self
                .sections
                .seats_in(section)
                .iter()
                .copied()
                .find(|id| self.seats.get(*id).is_some_and(|s| !s.is_booked()));

            debug!(section = %section, found = free.is_some(), "Section tried");
            if free.is_some() {
                return free;
            }
        }
        None
    }

    /// First booked seat, section by section, whose RAC queue accepts `gender`.
    fn find_rac_seat(&self, gender: &Gender) -> Option<SeatId> {
        self.sections.iter().find(|id| {
            self.seats
                .get(*id)
                .is_some_and(|s| s.is_booked() && s.rac().accepts(gender))
        })
    }
}

impl Default for AllocationEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
