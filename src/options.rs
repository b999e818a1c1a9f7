//! Game configuration options.

/// Configuration options for an Elevens session.
///
/// The rules themselves are fixed; options cover the presentation metrics
/// the layout is computed from and the pacing of the timed transitions.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use elevens::GameOptions;
///
/// let options = GameOptions::default()
///     .with_screen(1280.0, 720.0)
///     .with_deal_speed(24.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOptions {
    /// Screen width in pixels.
    pub screen_width: f32,
    /// Screen height in pixels.
    pub screen_height: f32,
    /// Card width in pixels.
    pub card_width: f32,
    /// Card height in pixels.
    pub card_height: f32,
    /// Gap between adjacent cards, both axes.
    pub card_margin: f32,
    /// Speed factor of the per-pile deal-in animation.
    pub deal_speed: f32,
    /// Speed factor of the post-pairing card movement animation.
    pub move_speed: f32,
    /// Speed factor of the end-screen fade.
    pub fade_speed: f32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 480.0,
            card_width: 72.0,
            card_height: 100.0,
            card_margin: 5.0,
            deal_speed: 12.0,
            move_speed: 2.0,
            fade_speed: 3.0,
        }
    }
}

impl GameOptions {
    /// Sets the screen dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use elevens::GameOptions;
    ///
    /// let options = GameOptions::default().with_screen(1024.0, 768.0);
    /// assert_eq!(options.screen_width, 1024.0);
    /// ```
    #[must_use]
    pub const fn with_screen(mut self, width: f32, height: f32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Sets the card dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use elevens::GameOptions;
    ///
    /// let options = GameOptions::default().with_card_size(60.0, 84.0);
    /// assert_eq!(options.card_height, 84.0);
    /// ```
    #[must_use]
    pub const fn with_card_size(mut self, width: f32, height: f32) -> Self {
        self.card_width = width;
        self.card_height = height;
        self
    }

    /// Sets the gap between adjacent cards.
    ///
    /// # Example
    ///
    /// ```
    /// use elevens::GameOptions;
    ///
    /// let options = GameOptions::default().with_card_margin(8.0);
    /// assert_eq!(options.card_margin, 8.0);
    /// ```
    #[must_use]
    pub const fn with_card_margin(mut self, margin: f32) -> Self {
        self.card_margin = margin;
        self
    }

    /// Sets the deal-in animation speed factor.
    ///
    /// # Example
    ///
    /// ```
    /// use elevens::GameOptions;
    ///
    /// let options = GameOptions::default().with_deal_speed(24.0);
    /// assert_eq!(options.deal_speed, 24.0);
    /// ```
    #[must_use]
    pub const fn with_deal_speed(mut self, speed: f32) -> Self {
        self.deal_speed = speed;
        self
    }

    /// Sets the card movement animation speed factor.
    ///
    /// # Example
    ///
    /// ```
    /// use elevens::GameOptions;
    ///
    /// let options = GameOptions::default().with_move_speed(4.0);
    /// assert_eq!(options.move_speed, 4.0);
    /// ```
    #[must_use]
    pub const fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Sets the end-screen fade speed factor.
    ///
    /// # Example
    ///
    /// ```
    /// use elevens::GameOptions;
    ///
    /// let options = GameOptions::default().with_fade_speed(6.0);
    /// assert_eq!(options.fade_speed, 6.0);
    /// ```
    #[must_use]
    pub const fn with_fade_speed(mut self, speed: f32) -> Self {
        self.fade_speed = speed;
        self
    }
}
