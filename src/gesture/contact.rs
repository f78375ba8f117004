use super::Fist;

/// Rising-edge detector standing in for a physics engine's contact-begin
/// callback: at most one begin per overlap, and no end event at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contact {
    touching: bool,
}

impl Contact {
    /// Sample the fists for this frame. True when a contact just began.
    pub fn begins(&mut self, a: &Fist, b: &Fist) -> bool {
        let was = std::mem::replace(&mut self.touching, a.touches(b));
        self.touching && !was
    }
    pub fn clear(&mut self) {
        self.touching = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Point;

    #[test]
    fn one_begin_per_overlap() {
        let mut contact = Contact::default();
        let opponent = Fist::new(Point::new(0.0, 400.0), 150.0);
        let mut player = Fist::new(Point::new(0.0, -400.0), 150.0);
        player.grab(player.origin());
        assert!(!contact.begins(&player, &opponent));
        player.drag(Point::new(0.0, 200.0));
        assert!(contact.begins(&player, &opponent));
        player.drag(Point::new(0.0, 250.0));
        assert!(!contact.begins(&player, &opponent));
        player.drag(Point::new(0.0, -100.0));
        assert!(!contact.begins(&player, &opponent));
        player.drag(Point::new(0.0, 150.0));
        assert!(contact.begins(&player, &opponent));
    }
}
