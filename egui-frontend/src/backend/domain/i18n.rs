//! User-facing strings in every supported language.
//!
//! Validation messages are not listed here; they come from
//! [`ValidationError`](crate::backend::domain::validation::ValidationError)
//! and are always English.

use shared::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    // App shell
    AppTitle,
    BookingScreen,
    AdminScreen,
    StepSelectService,
    StepChooseTime,
    StepEnterDetails,

    // Service selection
    SelectAService,
    FilterAll,
    FilterFree,
    FilterPaid,
    FreeBadge,
    SelectServiceHint,

    // Calendar
    SelectDateTime,
    AvailableTimeSlots,
    Available,
    Unavailable,
    Selected,
    BackToServices,
    NoSlotsAvailable,

    // Personal info
    PersonalInformation,
    FirstName,
    LastName,
    Email,
    Phone,
    AdditionalNotes,
    ProceedToPayment,
    ConfirmBooking,
    BackToTimeSelection,

    // Payment
    PaymentInformation,
    BookingSummary,
    CardNumber,
    ExpiryDate,
    Cvc,
    Pay,
    AndConfirm,
    BackToPersonalInfo,
    Processing,

    // Confirmation
    BookingConfirmed,
    ConfirmationSentTo,
    AppointmentDetails,
    ServiceLabel,
    DateLabel,
    TimeLabel,
    DurationLabel,
    TotalPaid,
    PriceLabel,
    Free,
    WhatsNext,
    NextCalendarInvite,
    NextReminder,
    NextReschedule,
    BookAnother,
    ReturnHome,

    // Failure
    BookingFailed,
    FailureExplanation,
    AttemptedBooking,
    WhatYouCanDo,
    AdviceCheckPayment,
    AdviceDifferentSlot,
    AdviceContactSupport,
    AdviceSlotHeld,
    TryAgain,
    StartOver,
    ContactSupport,
    SupportContactDetails,
    Close,

    // Country picker
    SelectCountry,
    Done,
    SearchCountries,

    // Admin dashboard
    AdminTitle,
    AdminSubtitle,
    Overview,
    Appointments,
    Customers,
    Services,
    Settings,
    TotalAppointments,
    Confirmed,
    Pending,
    Revenue,
    Paid,
    UpcomingAppointments,
    Filter,
    ViewAllAppointments,
    AllAppointments,
    ColumnCustomer,
    ColumnService,
    ColumnDate,
    ColumnTime,
    ColumnStatus,
    CustomerManagement,
    CustomerManagementHint,
    ServiceManagement,
    ServiceManagementHint,
    SystemSettings,
    SystemSettingsHint,
}

impl Message {
    pub fn text(self, locale: Locale) -> &'static str {
        let (en, es) = self.translations();
        match locale {
            Locale::English => en,
            Locale::Spanish => es,
        }
    }

    fn translations(self) -> (&'static str, &'static str) {
        use Message::*;
        match self {
            AppTitle => ("Book Your Appointment", "Reserva tu cita"),
            BookingScreen => ("Booking", "Reservas"),
            AdminScreen => ("Admin", "Administración"),
            StepSelectService => ("Select Service", "Elegir servicio"),
            StepChooseTime => ("Choose Time", "Elegir hora"),
            StepEnterDetails => ("Your Details", "Tus datos"),

            SelectAService => ("Select a Service", "Selecciona un servicio"),
            FilterAll => ("All", "Todos"),
            FilterFree => ("Free", "Gratis"),
            FilterPaid => ("Paid", "De pago"),
            FreeBadge => ("FREE", "GRATIS"),
            SelectServiceHint => ("Select a service to continue booking", "Selecciona un servicio para continuar"),

            SelectDateTime => ("Select Date & Time", "Selecciona fecha y hora"),
            AvailableTimeSlots => ("Available Time Slots", "Horarios disponibles"),
            Available => ("Available", "Disponible"),
            Unavailable => ("Unavailable", "No disponible"),
            Selected => ("Selected", "Seleccionado"),
            BackToServices => ("Back to Services", "Volver a servicios"),
            NoSlotsAvailable => ("No time slots available on this day", "No hay horarios disponibles este día"),

            PersonalInformation => ("Personal Information", "Información personal"),
            FirstName => ("First Name", "Nombre"),
            LastName => ("Last Name", "Apellido"),
            Email => ("Email", "Correo electrónico"),
            Phone => ("Phone", "Teléfono"),
            AdditionalNotes => ("Additional Notes (Optional)", "Notas adicionales (opcional)"),
            ProceedToPayment => ("Proceed to Payment", "Continuar al pago"),
            ConfirmBooking => ("Confirm Booking", "Confirmar reserva"),
            BackToTimeSelection => ("Back to Time Selection", "Volver a la selección de hora"),

            PaymentInformation => ("Payment Information", "Información de pago"),
            BookingSummary => ("Booking Summary", "Resumen de la reserva"),
            CardNumber => ("Card Number", "Número de tarjeta"),
            ExpiryDate => ("Expiry Date", "Fecha de caducidad"),
            Cvc => ("CVC", "CVC"),
            Pay => ("Pay", "Pagar"),
            AndConfirm => ("& Confirm", "y confirmar"),
            BackToPersonalInfo => ("Back to Personal Info", "Volver a información personal"),
            Processing => ("Processing...", "Procesando..."),

            BookingConfirmed => ("Booking Confirmed!", "¡Reserva confirmada!"),
            ConfirmationSentTo => (
                "Your appointment has been successfully booked. A confirmation email with all details has been sent to",
                "Tu cita ha sido reservada con éxito. Se ha enviado un correo de confirmación con todos los detalles a",
            ),
            AppointmentDetails => ("Appointment Details", "Detalles de la cita"),
            ServiceLabel => ("Service:", "Servicio:"),
            DateLabel => ("Date:", "Fecha:"),
            TimeLabel => ("Time:", "Hora:"),
            DurationLabel => ("Duration:", "Duración:"),
            TotalPaid => ("Total Paid:", "Total pagado:"),
            PriceLabel => ("Price:", "Precio:"),
            Free => ("Free", "Gratis"),
            WhatsNext => ("What's Next?", "¿Qué sigue?"),
            NextCalendarInvite => ("You'll receive a calendar invite shortly", "Recibirás una invitación de calendario en breve"),
            NextReminder => (
                "We'll send a reminder 24 hours before your appointment",
                "Te enviaremos un recordatorio 24 horas antes de tu cita",
            ),
            NextReschedule => (
                "Need to reschedule? Contact us at least 24 hours in advance",
                "¿Necesitas cambiar la cita? Contáctanos con al menos 24 horas de antelación",
            ),
            BookAnother => ("Book Another", "Reservar otra"),
            ReturnHome => ("Return Home", "Volver al inicio"),

            BookingFailed => ("Booking Failed", "La reserva ha fallado"),
            FailureExplanation => (
                "We're sorry, but there was an issue processing your booking. This could be due to a payment problem or a technical error.",
                "Lo sentimos, hubo un problema al procesar tu reserva. Puede deberse a un problema con el pago o a un error técnico.",
            ),
            AttemptedBooking => ("Attempted Booking", "Reserva intentada"),
            WhatYouCanDo => ("What You Can Do:", "Qué puedes hacer:"),
            AdviceCheckPayment => ("Check your payment method and try again", "Revisa tu método de pago e inténtalo de nuevo"),
            AdviceDifferentSlot => ("Try selecting a different time slot", "Prueba a seleccionar otro horario"),
            AdviceContactSupport => ("Contact our support team for assistance", "Contacta con nuestro equipo de soporte"),
            AdviceSlotHeld => (
                "Your time slot is still available for the next 10 minutes",
                "Tu horario sigue disponible durante los próximos 10 minutos",
            ),
            TryAgain => ("Try Again", "Intentar de nuevo"),
            StartOver => ("Start Over", "Empezar de nuevo"),
            ContactSupport => ("Contact Support", "Contactar con soporte"),
            SupportContactDetails => (
                "Support contact: support@bookingapp.com or call (555) 123-4567",
                "Contacto de soporte: support@bookingapp.com o llama al (555) 123-4567",
            ),
            Close => ("Close", "Cerrar"),

            SelectCountry => ("Select Country", "Selecciona un país"),
            Done => ("Done", "Listo"),
            SearchCountries => ("Search countries...", "Buscar países..."),

            AdminTitle => ("Admin Dashboard", "Panel de administración"),
            AdminSubtitle => ("Manage your booking system", "Gestiona tu sistema de reservas"),
            Overview => ("Overview", "Resumen"),
            Appointments => ("Appointments", "Citas"),
            Customers => ("Customers", "Clientes"),
            Services => ("Services", "Servicios"),
            Settings => ("Settings", "Ajustes"),
            TotalAppointments => ("Total Appointments", "Citas totales"),
            Confirmed => ("Confirmed", "Confirmadas"),
            Pending => ("Pending", "Pendientes"),
            Revenue => ("Revenue", "Ingresos"),
            Paid => ("Paid", "Pagada"),
            UpcomingAppointments => ("Upcoming Appointments", "Próximas citas"),
            Filter => ("Filter", "Filtrar"),
            ViewAllAppointments => ("View All Appointments", "Ver todas las citas"),
            AllAppointments => ("All Appointments", "Todas las citas"),
            ColumnCustomer => ("Customer", "Cliente"),
            ColumnService => ("Service", "Servicio"),
            ColumnDate => ("Date", "Fecha"),
            ColumnTime => ("Time", "Hora"),
            ColumnStatus => ("Status", "Estado"),
            CustomerManagement => ("Customer Management", "Gestión de clientes"),
            CustomerManagementHint => ("Manage your customer database here.", "Gestiona aquí tu base de datos de clientes."),
            ServiceManagement => ("Service Management", "Gestión de servicios"),
            ServiceManagementHint => (
                "Configure your services, pricing, and availability.",
                "Configura tus servicios, precios y disponibilidad.",
            ),
            SystemSettings => ("System Settings", "Ajustes del sistema"),
            SystemSettingsHint => (
                "Configure booking rules, notifications, and Google Calendar sync.",
                "Configura las reglas de reserva, las notificaciones y la sincronización con Google Calendar.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_is_default() {
        assert_eq!(Message::ConfirmBooking.text(Locale::default()), "Confirm Booking");
    }

    #[test]
    fn test_spanish_translation() {
        assert_eq!(Message::TryAgain.text(Locale::Spanish), "Intentar de nuevo");
        assert_eq!(Message::SelectAService.text(Locale::Spanish), "Selecciona un servicio");
    }
}
