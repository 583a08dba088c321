#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormCopy {
    pub title: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub company: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub success: &'static str,
    pub success_description: &'static str,
    pub missing_fields: &'static str,
    pub invalid_email: &'static str,
}

/// One block of the contact details column. `value` may span lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoItem {
    pub title: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form: FormCopy,
    pub info_title: &'static str,
    pub address: InfoItem,
    pub phone: InfoItem,
    pub email: InfoItem,
    pub hours: InfoItem,
    pub map_title: &'static str,
    pub map_placeholder: &'static str,
    pub map_city: &'static str,
}

pub static CONTACT_RO: ContactContent = ContactContent {
    title: "Contactează-ne",
    subtitle: "Gata să transformăm viziunea brandului tău în realitate? Să discutăm despre proiectul tău.",
    form: FormCopy {
        title: "Trimite-ne un mesaj",
        name: "Nume complet",
        email: "Adresa de email",
        phone: "Numărul de telefon",
        company: "Compania (opțional)",
        message: "Mesajul tău",
        submit: "Trimite Mesajul",
        submitting: "Se trimite...",
        success: "Mesajul a fost trimis cu succes!",
        success_description: "Îți vom răspunde în cel mai scurt timp posibil.",
        missing_fields: "Completează numele, emailul și mesajul.",
        invalid_email: "Adresa de email nu pare validă.",
    },
    info_title: "Informații de Contact",
    address: InfoItem {
        title: "Adresa",
        value: "Str. Exemplu nr. 123\nBucurești, România",
    },
    phone: InfoItem {
        title: "Telefon",
        value: "+40 721 234 567",
    },
    email: InfoItem {
        title: "Email",
        value: "contact@digitalsense.ro",
    },
    hours: InfoItem {
        title: "Program de Lucru",
        value: "Luni - Vineri: 9:00 - 18:00\nSâmbătă: 10:00 - 14:00",
    },
    map_title: "Locația Noastră",
    map_placeholder: "Harta interactivă va fi afișată aici",
    map_city: "București, România",
};

pub static CONTACT_EN: ContactContent = ContactContent {
    title: "Contact Us",
    subtitle: "Ready to transform your brand vision into reality? Let's discuss your project.",
    form: FormCopy {
        title: "Send us a message",
        name: "Full name",
        email: "Email address",
        phone: "Phone number",
        company: "Company (optional)",
        message: "Your message",
        submit: "Send Message",
        submitting: "Sending...",
        success: "Message sent successfully!",
        success_description: "We will get back to you as soon as possible.",
        missing_fields: "Please fill in your name, email and message.",
        invalid_email: "That email address does not look valid.",
    },
    info_title: "Contact Information",
    address: InfoItem {
        title: "Address",
        value: "123 Example Street\nBucharest, Romania",
    },
    phone: InfoItem {
        title: "Phone",
        value: "+40 721 234 567",
    },
    email: InfoItem {
        title: "Email",
        value: "contact@digitalsense.com",
    },
    hours: InfoItem {
        title: "Working Hours",
        value: "Monday - Friday: 9:00 - 18:00\nSaturday: 10:00 - 14:00",
    },
    map_title: "Our Location",
    map_placeholder: "Interactive map would be embedded here",
    map_city: "Bucharest, Romania",
};
