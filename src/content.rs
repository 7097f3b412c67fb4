//! Static page content: the feature grid, testimonials, pricing tiers,
//! and FAQ entries.
//!
//! Everything here is fixed at compile time. The catalogs are `static`
//! arrays so sections can borrow entries with a `'static` lifetime.

use crate::ui::icons;

/// One entry in the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// SVG path data for the feature glyph
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One customer quote in the rotating carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    /// External avatar image URL (standard broken-image behavior on failure)
    pub avatar: &'static str,
    /// Star rating, 0..=5
    pub rating: u8,
    pub text: &'static str,
}

/// One pricing plan card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    /// Monthly price in whole dollars
    pub price: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Highlighted with a ring and a "Most Popular" badge
    pub popular: bool,
}

/// One question/answer pair in the accordion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        icon: icons::ICON_LIGHTNING,
        title: "AI-Powered Content",
        description: "Generate compelling ad copy and visuals with advanced AI algorithms",
    },
    Feature {
        icon: icons::ICON_TARGET,
        title: "Smart Targeting",
        description: "Reach your ideal audience with precision targeting and behavioral analysis",
    },
    Feature {
        icon: icons::ICON_CHART_BAR,
        title: "Real-time Analytics",
        description: "Track performance metrics and optimize campaigns in real-time",
    },
    Feature {
        icon: icons::ICON_USERS,
        title: "Team Collaboration",
        description: "Seamless workflow management for marketing teams of any size",
    },
    Feature {
        icon: icons::ICON_SHIELD,
        title: "Brand Safety",
        description: "Ensure brand consistency and compliance across all marketing channels",
    },
    Feature {
        icon: icons::ICON_SPARKLE,
        title: "Creative Studio",
        description: "Professional design tools powered by AI for stunning visuals",
    },
];

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "CMO at TechStart",
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b789?w=150",
        rating: 5,
        text: "ADmyBRAND transformed our marketing ROI by 300%. The AI insights are game-changing!",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Marketing Director",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150",
        rating: 5,
        text: "Best marketing tool we've ever used. The automation features saved us 20 hours per week.",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Brand Manager",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150",
        rating: 5,
        text: "The creative studio is incredible. We're producing professional campaigns in minutes, not days.",
    },
];

pub static PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        price: 49,
        description: "Perfect for small businesses",
        features: &[
            "5 AI-generated campaigns/month",
            "Basic analytics",
            "Email support",
            "1 team member",
        ],
        popular: false,
    },
    PricingTier {
        name: "Professional",
        price: 149,
        description: "Ideal for growing companies",
        features: &[
            "25 AI-generated campaigns/month",
            "Advanced analytics",
            "Priority support",
            "5 team members",
            "Custom branding",
        ],
        popular: true,
    },
    PricingTier {
        name: "Enterprise",
        price: 399,
        description: "For large organizations",
        features: &[
            "Unlimited campaigns",
            "Enterprise analytics",
            "24/7 dedicated support",
            "Unlimited team members",
            "Custom integrations",
            "White-label solution",
        ],
        popular: false,
    },
];

pub static FAQS: [Faq; 4] = [
    Faq {
        question: "How does the AI content generation work?",
        answer: "Our AI analyzes your brand voice, target audience, and campaign goals to \
                 generate personalized content that resonates with your customers.",
    },
    Faq {
        question: "Can I integrate with existing marketing tools?",
        answer: "Yes! We offer integrations with 50+ popular marketing platforms including \
                 Google Ads, Facebook, HubSpot, and Salesforce.",
    },
    Faq {
        question: "Is there a free trial available?",
        answer: "Absolutely! We offer a 14-day free trial with full access to all features. \
                 No credit card required.",
    },
    Faq {
        question: "How secure is my data?",
        answer: "We use enterprise-grade encryption and comply with GDPR, CCPA, and SOC 2 \
                 standards to ensure your data is completely secure.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn feature_grid_has_six_entries() {
        assert_eq!(FEATURES.len(), 6);
        for feature in &FEATURES {
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
            assert!(!feature.icon.is_empty());
        }
    }

    #[test]
    fn testimonial_ratings_fit_five_stars() {
        assert_eq!(TESTIMONIALS.len(), 3);
        for t in &TESTIMONIALS {
            assert!(t.rating <= 5);
            assert!(t.avatar.starts_with("https://"));
        }
    }

    #[test]
    fn exactly_one_tier_is_popular() {
        let popular = PRICING_TIERS.iter().filter(|t| t.popular).count();
        assert_eq!(popular, 1);
    }

    #[test]
    fn tier_prices_ascend() {
        for pair in PRICING_TIERS.windows(2) {
            assert!(pair[0].price < pair[1].price);
        }
    }

    #[test]
    fn every_faq_has_an_answer() {
        assert_eq!(FAQS.len(), 4);
        for faq in &FAQS {
            assert!(faq.question.ends_with('?'));
            assert!(!faq.answer.is_empty());
        }
    }
}
