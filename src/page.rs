use crate::models::Testimonial;

pub const PAGES: [&str; 3] = ["about", "blog", "contact"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sidebar {
    pub active: bool,
}

impl Sidebar {
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }
}

/// Testimonial modal plus its overlay. Both toggle together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialModal {
    pub active: bool,
    pub overlay_active: bool,
    pub img_src: String,
    pub img_alt: String,
    pub title: String,
    pub text: String,
}

impl TestimonialModal {
    pub fn open(&mut self, testimonial: &Testimonial) {
        self.img_src = testimonial.avatar.clone();
        self.img_alt = testimonial.name.clone();
        self.title = testimonial.name.clone();
        self.text = testimonial.text.clone();
        self.toggle();
    }

    pub fn close(&mut self) {
        self.toggle();
    }

    fn toggle(&mut self) {
        self.active = !self.active;
        self.overlay_active = !self.overlay_active;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFilter {
    pub selected: String,
    /// Text shown in the collapsed select box.
    pub select_label: String,
    pub select_open: bool,
    pub last_clicked: Option<String>,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            selected: "all".to_string(),
            select_label: "All".to_string(),
            select_open: false,
            last_clicked: None,
        }
    }
}

impl CategoryFilter {
    pub fn toggle_select(&mut self) {
        self.select_open = !self.select_open;
    }

    /// Picks a category from the dropdown; the dropdown closes afterwards.
    pub fn select_item(&mut self, label: &str) {
        self.select_label = label.to_string();
        self.toggle_select();
        self.selected = label.to_lowercase();
    }

    /// Picks a category from the filter buttons.
    pub fn click_button(&mut self, label: &str) {
        self.select_label = label.to_string();
        self.selected = label.to_lowercase();
        self.last_clicked = Some(self.selected.clone());
    }

    pub fn matches(&self, category: &str) -> bool {
        self.selected == "all" || self.selected == category
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub pages: Vec<String>,
    pub active: Option<usize>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            pages: PAGES.iter().map(|page| page.to_string()).collect(),
            active: Some(0),
        }
    }
}

impl Navigation {
    /// Activates the page whose name matches the link text. Returns true when
    /// the blog list has to be reloaded.
    pub fn select(&mut self, link_text: &str) -> bool {
        let wanted = link_text.trim().to_lowercase();
        let mut reload_blogs = false;
        self.active = None;
        for (index, page) in self.pages.iter().enumerate() {
            if *page == wanted {
                self.active = Some(index);
                reload_blogs = page == "blog";
            }
        }
        reload_blogs
    }

    pub fn is_active(&self, page: &str) -> bool {
        self.active
            .and_then(|index| self.pages.get(index))
            .is_some_and(|active| active == page)
    }
}
