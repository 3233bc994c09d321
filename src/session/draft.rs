use crate::models::{PortfolioItem, Provider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioField {
    PhotoId,
    Title,
    Description,
}

/// Working copy of a provider while the admin edits it.
/// Nothing reaches the catalog until the draft is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderDraft {
    record: Provider,
}

impl ProviderDraft {
    pub fn new(provider: &Provider) -> Self {
        Self {
            record: provider.clone(),
        }
    }

    pub fn record(&self) -> &Provider {
        &self.record
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.record.name = name.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.record.category = category.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.record.phone = phone.into();
    }

    pub fn set_price(&mut self, price_value: u32) {
        self.record.price_value = price_value;
    }

    pub fn set_rating(&mut self, rating: f64) {
        self.record.rating = rating;
    }

    pub fn set_reviews(&mut self, reviews: u32) {
        self.record.reviews = reviews;
    }

    pub fn set_completed_jobs(&mut self, completed_jobs: u32) {
        self.record.completed_jobs = completed_jobs;
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.record.bio = bio.into();
    }

    /// Append a placeholder project for the admin to fill in
    pub fn add_portfolio_item(&mut self) {
        self.record.portfolio.push(PortfolioItem {
            photo_id: "1581092160607-ee22621ddbb3".to_string(),
            title: "New Project Title".to_string(),
            description: "Briefly describe the results of this project...".to_string(),
        });
    }

    pub fn remove_portfolio_item(&mut self, index: usize) {
        if index < self.record.portfolio.len() {
            self.record.portfolio.remove(index);
        }
    }

    pub fn update_portfolio_item(&mut self, index: usize, field: PortfolioField, value: impl Into<String>) {
        let Some(item) = self.record.portfolio.get_mut(index) else {
            return;
        };
        let value = value.into();
        match field {
            PortfolioField::PhotoId => item.photo_id = value,
            PortfolioField::Title => item.title = value,
            PortfolioField::Description => item.description = value,
        }
    }

    /// Swap an item with its neighbour. Moving past either end does nothing.
    pub fn move_portfolio_item(&mut self, index: usize, direction: MoveDirection) {
        let len = self.record.portfolio.len();
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1),
        };
        if let Some(target) = target.filter(|&t| t < len && index < len) {
            self.record.portfolio.swap(index, target);
        }
    }

    pub fn into_provider(self) -> Provider {
        self.record
    }
}
