// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Text and image references for the landing page sections.

pub const SITE_NAME: &str = "Madr";
pub const TAGLINE: &str = "Meu arquivo digital de romances";
pub const PAGE_TITLE: &str = "Madr - Meu arquivo digital de romances";

pub const LOGO_IMAGE: &str = "/images/madr-logo-site.svg";
pub const SEARCH_ICON: &str = "/images/lupa-preto-1.svg";
pub const HERO_IMAGE: &str = "/images/hero-madr-desktop-1.png";

pub struct ContentCard {
	pub image: &'static str,
	pub alt: &'static str,
	pub title: &'static str,
	pub description: &'static str,
}

const ROMANCE_CARD: ContentCard = ContentCard {
	image: "/images/romance-romantico.png",
	alt: "Romance",
	title: "Romances online para ler",
	description: "Fique sempre por dentro do que acontece",
};

pub const CAROUSEL_HEADING: [&str; 2] = ["Venha com a gente", "e conte o seu romance!"];
pub const CAROUSEL_CARDS: [ContentCard; 5] = [ROMANCE_CARD, ROMANCE_CARD, ROMANCE_CARD, ROMANCE_CARD, ROMANCE_CARD];
pub const CAROUSEL_VISIBLE_CARDS: usize = 3;

pub struct AdvantageTile {
	pub icon: &'static str,
	pub alt: &'static str,
	pub title: &'static str,
	pub text: &'static str,
}

const AUTHORS_TILE: AdvantageTile = AdvantageTile {
	icon: "/images/icon-autores.svg",
	alt: "Autores",
	title: "Diversos autores",
	text: "Dom Casmurro, José de Alencar e muito mais!",
};

pub const ADVANTAGE_TILES: [AdvantageTile; 6] = [
	AdvantageTile {
		icon: "/images/primeiro-lugar.svg",
		alt: "Primeiro lugar",
		title: "Top 1",
		text: "Sites de romances 2025",
	},
	AUTHORS_TILE,
	AUTHORS_TILE,
	AUTHORS_TILE,
	AUTHORS_TILE,
	AUTHORS_TILE,
];

pub struct SocialLink {
	pub icon: &'static str,
	pub name: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
	SocialLink {
		icon: "/images/facebook-sem-fundo.png",
		name: "Facebook",
	},
	SocialLink {
		icon: "/images/instagram-sem-fundo.png",
		name: "Instagram",
	},
	SocialLink {
		icon: "/images/whatsapp-sem-fundo.png",
		name: "WhatsApp",
	},
];

pub const COPYRIGHT_NOTICE: &str =
	"© Copyrights - Todos os direitos reservados. | Empresa fictícia Madr. Criada para trabalho educacional.";
