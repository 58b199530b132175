use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::timer::{chain_timeouts, Scheduler, TimeoutChain, TimerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Tools,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Tools => "tools",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Database => "Database",
            Self::Tools => "Tools & DevOps",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(SkillCategory),
}

impl CategoryFilter {
    pub const TABS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(SkillCategory::Frontend),
        CategoryFilter::Only(SkillCategory::Backend),
        CategoryFilter::Only(SkillCategory::Database),
        CategoryFilter::Only(SkillCategory::Tools),
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.id(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Technologies",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: SkillCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkillError {
    #[error("unknown skill category: {0}")]
    UnknownCategory(String),
}

impl FromStr for CategoryFilter {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TABS
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| SkillError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Proficiency, 0..=100.
    pub level: u8,
    pub category: SkillCategory,
}

/// Skills matching `filter`, grouped by [`SkillCategory::ALL`] order and in
/// declared order within each group.
pub fn filter_skills(skills: &[Skill], filter: CategoryFilter) -> Vec<Skill> {
    SkillCategory::ALL
        .into_iter()
        .filter(|&category| filter.matches(category))
        .flat_map(|category| skills.iter().filter(move |s| s.category == category))
        .copied()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    Revealed(usize),
    Complete,
    /// The step belongs to a sequence that has since been restarted.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct RevealSequence {
    generation: u64,
    revealed: usize,
    total: usize,
}

impl RevealSequence {
    pub fn restart(&mut self, total: usize) -> u64 {
        self.generation += 1;
        self.revealed = 0;
        self.total = total;
        self.generation
    }

    pub fn step(&mut self, generation: u64) -> RevealStep {
        if generation != self.generation {
            return RevealStep::Stale;
        }
        if self.revealed >= self.total {
            return RevealStep::Complete;
        }
        self.revealed += 1;
        RevealStep::Revealed(self.revealed - 1)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_revealed(&self, position: usize) -> bool {
        position < self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.total
    }

    pub fn finish(&mut self) {
        self.revealed = self.total;
    }
}

#[derive(Debug, Clone)]
pub struct SkillGrid {
    skills: Arc<[Skill]>,
    filter: CategoryFilter,
    visible: Vec<Skill>,
    reveal: RevealSequence,
}

impl SkillGrid {
    pub fn new(skills: impl Into<Arc<[Skill]>>) -> Self {
        let skills = skills.into();
        let visible = filter_skills(&skills, CategoryFilter::All);
        let mut reveal = RevealSequence::default();
        reveal.restart(visible.len());
        Self {
            skills,
            filter: CategoryFilter::All,
            visible,
            reveal,
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn visible(&self) -> &[Skill] {
        &self.visible
    }

    pub fn reveal(&self) -> &RevealSequence {
        &self.reveal
    }

    pub fn is_revealed(&self, position: usize) -> bool {
        self.reveal.is_revealed(position)
    }

    /// Replaces the filter and restarts the reveal sequence. Returns the
    /// generation the new sequence's steps must carry.
    pub fn set_category(&mut self, filter: CategoryFilter) -> u64 {
        self.filter = filter;
        self.visible = filter_skills(&self.skills, filter);
        let generation = self.reveal.restart(self.visible.len());
        log::debug!(
            "skill filter {filter}: {} entries, reveal generation {generation}",
            self.visible.len()
        );
        generation
    }

    pub fn set_category_id(&mut self, id: &str) -> Result<u64, SkillError> {
        let filter = id.parse()?;
        Ok(self.set_category(filter))
    }

    pub fn reveal_step(&mut self, generation: u64) -> RevealStep {
        self.reveal.step(generation)
    }

    pub fn reveal_all(&mut self) {
        self.reveal.finish();
    }
}

pub fn start_reveal<S, F>(
    scheduler: &S,
    delay: Duration,
    cadence: Duration,
    mut on_step: F,
) -> Result<TimeoutChain<S::Handle>, TimerError>
where
    S: Scheduler + Clone + 'static,
    S::Handle: 'static,
    F: FnMut() -> bool + 'static,
{
    chain_timeouts(scheduler, delay + cadence, move || on_step().then_some(cadence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TECHNOLOGIES;
    use crate::timer::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn names(skills: &[Skill]) -> Vec<&'static str> {
        skills.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_frontend_filter() {
        let mut grid = SkillGrid::new(TECHNOLOGIES);
        grid.set_category_id("frontend").unwrap();
        assert_eq!(
            names(grid.visible()),
            vec!["HTML", "CSS", "JavaScript", "React", "Tailwind CSS", "TypeScript"]
        );
    }

    #[test]
    fn test_all_filter_groups_by_category() {
        let grid = SkillGrid::new(TECHNOLOGIES);
        let visible = grid.visible();
        assert_eq!(visible.len(), 16);

        let ranks = visible
            .iter()
            .map(|s| SkillCategory::ALL.iter().position(|&c| c == s.category).unwrap())
            .collect::<Vec<_>>();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
        assert_eq!(visible[0].name, "HTML");
        assert_eq!(visible[6].name, "Node.js");
        assert_eq!(visible[10].name, "MySQL");
        assert_eq!(visible[15].name, "Figma");
    }

    #[test]
    fn test_grouping_ignores_declaration_order() {
        let skills = [
            Skill {
                name: "Git",
                icon: "devicon-git-plain",
                color: "#F05032",
                level: 90,
                category: SkillCategory::Tools,
            },
            Skill {
                name: "Python",
                icon: "devicon-python-plain",
                color: "#3776AB",
                level: 80,
                category: SkillCategory::Backend,
            },
            Skill {
                name: "CSS",
                icon: "devicon-css3-plain",
                color: "#1572B6",
                level: 90,
                category: SkillCategory::Frontend,
            },
        ];
        assert_eq!(
            names(&filter_skills(&skills, CategoryFilter::All)),
            vec!["CSS", "Python", "Git"]
        );
        assert!(filter_skills(&skills, CategoryFilter::Only(SkillCategory::Database)).is_empty());
    }

    #[test]
    fn test_category_ids() {
        for tab in CategoryFilter::TABS {
            assert_eq!(tab.id().parse::<CategoryFilter>().unwrap(), tab);
        }
        assert_eq!(
            "design".parse::<CategoryFilter>(),
            Err(SkillError::UnknownCategory("design".to_string()))
        );
        assert_eq!(CategoryFilter::Only(SkillCategory::Tools).label(), "Tools & DevOps");
    }

    #[test]
    fn test_unknown_category_keeps_filter() {
        let mut grid = SkillGrid::new(TECHNOLOGIES);
        grid.set_category(CategoryFilter::Only(SkillCategory::Database));
        assert!(grid.set_category_id("nope").is_err());
        assert_eq!(grid.filter(), CategoryFilter::Only(SkillCategory::Database));
        assert_eq!(grid.visible().len(), 3);
    }

    #[test]
    fn test_reveal_sequence_steps() {
        let mut grid = SkillGrid::new(TECHNOLOGIES);
        let generation = grid.set_category(CategoryFilter::Only(SkillCategory::Tools));
        assert_eq!(grid.reveal().revealed(), 0);

        assert_eq!(grid.reveal_step(generation), RevealStep::Revealed(0));
        assert_eq!(grid.reveal_step(generation), RevealStep::Revealed(1));
        assert!(grid.is_revealed(1));
        assert!(!grid.is_revealed(2));
        assert_eq!(grid.reveal_step(generation), RevealStep::Revealed(2));
        assert_eq!(grid.reveal_step(generation), RevealStep::Complete);
        assert!(grid.reveal().is_complete());
    }

    #[test]
    fn test_reveal_all() {
        let mut grid = SkillGrid::new(TECHNOLOGIES);
        let generation = grid.set_category(CategoryFilter::Only(SkillCategory::Backend));
        grid.reveal_all();
        assert!((0..4).all(|i| grid.is_revealed(i)));
        assert_eq!(grid.reveal_step(generation), RevealStep::Complete);
    }

    #[test]
    fn test_category_change_restarts_reveal() {
        let mut grid = SkillGrid::new(TECHNOLOGIES);
        let first = grid.set_category(CategoryFilter::All);
        grid.reveal_step(first);
        grid.reveal_step(first);

        let second = grid.set_category(CategoryFilter::Only(SkillCategory::Backend));
        assert_ne!(first, second);
        assert_eq!(grid.reveal().revealed(), 0);
        assert_eq!(grid.reveal_step(first), RevealStep::Stale);
        assert_eq!(grid.reveal().revealed(), 0);
        assert_eq!(grid.reveal_step(second), RevealStep::Revealed(0));
    }

    #[test]
    fn test_reveal_timer_cadence() {
        let clock = ManualClock::new();
        let grid = Rc::new(RefCell::new(SkillGrid::new(TECHNOLOGIES)));
        let generation = grid
            .borrow_mut()
            .set_category(CategoryFilter::Only(SkillCategory::Database));

        let state = grid.clone();
        let timer = start_reveal(
            &clock,
            Duration::from_millis(100),
            Duration::from_millis(80),
            move || matches!(state.borrow_mut().reveal_step(generation), RevealStep::Revealed(_)),
        )
        .unwrap();

        clock.advance_ms(179);
        assert_eq!(grid.borrow().reveal().revealed(), 0);
        clock.advance_ms(1);
        assert_eq!(grid.borrow().reveal().revealed(), 1);
        clock.advance_ms(160);
        assert_eq!(grid.borrow().reveal().revealed(), 3);
        assert!(timer.is_running());

        // the step after the last entry stops the interval
        clock.advance_ms(80);
        assert!(!timer.is_running());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_cancelled_reveal_stops_mid_sequence() {
        let clock = ManualClock::new();
        let grid = Rc::new(RefCell::new(SkillGrid::new(TECHNOLOGIES)));
        let first = grid.borrow_mut().set_category(CategoryFilter::All);

        let state = grid.clone();
        let timer = start_reveal(
            &clock,
            Duration::from_millis(100),
            Duration::from_millis(80),
            move || matches!(state.borrow_mut().reveal_step(first), RevealStep::Revealed(_)),
        )
        .unwrap();
        clock.advance_ms(340);
        assert_eq!(grid.borrow().reveal().revealed(), 3);

        timer.cancel();
        let second = grid
            .borrow_mut()
            .set_category(CategoryFilter::Only(SkillCategory::Frontend));
        let state = grid.clone();
        let _timer = start_reveal(
            &clock,
            Duration::from_millis(100),
            Duration::from_millis(80),
            move || matches!(state.borrow_mut().reveal_step(second), RevealStep::Revealed(_)),
        )
        .unwrap();
        assert_eq!(clock.pending(), 1);

        clock.advance_ms(10_000);
        assert_eq!(grid.borrow().reveal().revealed(), 6);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_dropping_reveal_before_delay() {
        let clock = ManualClock::new();
        let timer = start_reveal(
            &clock,
            Duration::from_millis(100),
            Duration::from_millis(80),
            || panic!("reveal step after drop"),
        )
        .unwrap();
        drop(timer);
        clock.advance_ms(1_000);
        assert_eq!(clock.pending(), 0);
    }
}
